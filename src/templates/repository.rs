//! Postgres repository built on the generic repository.

pub const PATH: &str = "internal/transport/repository/postgres/{{CAMEL_CASE}}.go";

pub const BODY: &str = r#"package postgres

import (
	"git.snapp.ninja/search-and-discovery/framework/pkg/ports"
	dto "git.snapp.ninja/snappshop/delivery/harley/internal/DTO"
	"git.snapp.ninja/snappshop/delivery/harley/internal/transport/repository"
)

type {{CAMEL_CASE}}Repository struct {
	repository.GenericRepository[dto.{{PASCAL_CASE}}]
	db  ports.Database
	log ports.LoggerWithTraceID
}

func New{{PASCAL_CASE}}Repository(db ports.Database, log ports.LoggerWithTraceID) repository.{{PASCAL_CASE}} {
	return &{{CAMEL_CASE}}Repository{
		GenericRepository: repository.NewGenericRepository[dto.{{PASCAL_CASE}}](db, log),
		db:                db,
		log:               log,
	}
}
"#;
