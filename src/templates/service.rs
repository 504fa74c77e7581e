//! Service interface and implementation delegating to the repository.

pub const PATH: &str = "internal/service/{{CAMEL_CASE}}.go";

pub const BODY: &str = r#"package service

import (
	"context"

	"git.snapp.ninja/search-and-discovery/framework/pkg/ports"
	dto "git.snapp.ninja/snappshop/delivery/harley/internal/DTO"
	"git.snapp.ninja/snappshop/delivery/harley/internal/transport/repository"
)

type {{PASCAL_CASE}} interface {
	Get{{PASCAL_CASE}}ByID(ctx context.Context, id int64) (dto.{{PASCAL_CASE}}, error)
	Update{{PASCAL_CASE}}(ctx context.Context, {{CAMEL_CASE}} dto.{{PASCAL_CASE}}) (dto.{{PASCAL_CASE}}, error)
	Create{{PASCAL_CASE}}(ctx context.Context, {{CAMEL_CASE}} dto.{{PASCAL_CASE}}) (dto.{{PASCAL_CASE}}, error)
	Delete{{PASCAL_CASE}}(ctx context.Context, id int64) error
	GetPaginated{{PASCAL_CASE}}s(ctx context.Context, pagination dto.Pagination) ([]dto.{{PASCAL_CASE}}, *dto.Pagination, error)
}

type {{CAMEL_CASE}}Service struct {
	log              ports.LoggerWithTraceID
	{{CAMEL_CASE}}Repository repository.{{PASCAL_CASE}}
}

func New{{PASCAL_CASE}}Service(log ports.LoggerWithTraceID, {{CAMEL_CASE}}Repository repository.{{PASCAL_CASE}}) {{PASCAL_CASE}} {
	return &{{CAMEL_CASE}}Service{
		log:              log,
		{{CAMEL_CASE}}Repository: {{CAMEL_CASE}}Repository,
	}
}

func (s *{{CAMEL_CASE}}Service) Get{{PASCAL_CASE}}ByID(ctx context.Context, id int64) (dto.{{PASCAL_CASE}}, error) {
	{{CAMEL_CASE}}, err := s.{{CAMEL_CASE}}Repository.GetByID(ctx, id)
	if err != nil {
		return dto.{{PASCAL_CASE}}{}, err
	}
	return {{CAMEL_CASE}}, nil
}

func (s *{{CAMEL_CASE}}Service) Update{{PASCAL_CASE}}(ctx context.Context, {{CAMEL_CASE}} dto.{{PASCAL_CASE}}) (dto.{{PASCAL_CASE}}, error) {
	err := s.{{CAMEL_CASE}}Repository.Update(ctx, &{{CAMEL_CASE}})
	if err != nil {
		return dto.{{PASCAL_CASE}}{}, err
	}
	return {{CAMEL_CASE}}, nil
}

func (s *{{CAMEL_CASE}}Service) Create{{PASCAL_CASE}}(ctx context.Context, {{CAMEL_CASE}} dto.{{PASCAL_CASE}}) (dto.{{PASCAL_CASE}}, error) {
	err := s.{{CAMEL_CASE}}Repository.Create(ctx, &{{CAMEL_CASE}})
	if err != nil {
		return dto.{{PASCAL_CASE}}{}, err
	}
	return {{CAMEL_CASE}}, nil
}

func (s *{{CAMEL_CASE}}Service) Delete{{PASCAL_CASE}}(ctx context.Context, id int64) error {
	err := s.{{CAMEL_CASE}}Repository.Delete(ctx, id)
	if err != nil {
		return err
	}
	return nil
}

func (s *{{CAMEL_CASE}}Service) GetPaginated{{PASCAL_CASE}}s(ctx context.Context, pagination dto.Pagination) ([]dto.{{PASCAL_CASE}}, *dto.Pagination, error) {
	{{CAMEL_CASE}}s, resultPagination, err := s.{{CAMEL_CASE}}Repository.FindAll(ctx, pagination)
	if err != nil {
		return nil, nil, err
	}
	return {{CAMEL_CASE}}s, resultPagination, nil
}
"#;
