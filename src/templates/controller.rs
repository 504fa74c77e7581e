//! REST controller with create, read, update, delete and paginated list handlers.

pub const PATH: &str = "internal/transport/http/rest/controller/v1/{{CAMEL_CASE}}/controller.go";

pub const BODY: &str = r#"package {{LOWER_CASE}}

import (
	"errors"

	"git.snapp.ninja/search-and-discovery/framework/pkg/adapters/errorUtil/appErr"
	"git.snapp.ninja/search-and-discovery/framework/pkg/ports"
	dto "git.snapp.ninja/snappshop/delivery/harley/internal/DTO"
	"git.snapp.ninja/snappshop/delivery/harley/internal/consts"
	"git.snapp.ninja/snappshop/delivery/harley/internal/service"
	"git.snapp.ninja/snappshop/delivery/harley/internal/transport/http/rest/httpUtils"
	"git.snapp.ninja/snappshop/delivery/harley/internal/transport/http/rest/validator"
	"git.snapp.ninja/snappshop/delivery/harley/internal/utils"
	"go.elastic.co/apm"
)

type {{PASCAL_CASE}} interface {
	GetPaginated{{PASCAL_CASE}}s(c *ports.HttpContext) error
	Create{{PASCAL_CASE}}(c *ports.HttpContext) error
	Get{{PASCAL_CASE}}ByID(c *ports.HttpContext) error
	Update{{PASCAL_CASE}}(c *ports.HttpContext) error
	Delete{{PASCAL_CASE}}(c *ports.HttpContext) error
}

type {{CAMEL_CASE}}Controller struct {
	{{CAMEL_CASE}}Service    service.{{PASCAL_CASE}}
	customValidation validator.CustomValidation
	log              ports.LoggerWithTraceID
}

func New(log ports.LoggerWithTraceID, {{CAMEL_CASE}}Service service.{{PASCAL_CASE}}, customValidation validator.CustomValidation) {{PASCAL_CASE}} {
	return &{{CAMEL_CASE}}Controller{
		{{CAMEL_CASE}}Service:    {{CAMEL_CASE}}Service,
		customValidation: customValidation,
		log:              log,
	}
}

// @Summary		Create a {{PASCAL_CASE}}
// @Description	This route will create a {{LOWER_CASE}}
// @Tags			{{PASCAL_CASE}}
// @Accept			json
// @Produce		json
// @Param			body	body		create{{PASCAL_CASE}}Request 	true	"Create {{PASCAL_CASE}} request"
// @Success		201		{object}	ports.Response{data=dto.{{PASCAL_CASE}}}
// @Failure		400		{object}	ports.ErrorDetails
// @Failure		422		{object}	ports.ErrorDetails
// @Failure		500		{object}	ports.ErrorDetails
// @Router			/api/v1/{{KEBAB_CASE}}/ [post]
func (ctrl *{{CAMEL_CASE}}Controller) Create{{PASCAL_CASE}}(c *ports.HttpContext) error {
	span, ctx := apm.StartSpan(c.Context(), "Create{{PASCAL_CASE}}", "controller")
	defer span.End()

	var inputRequest create{{PASCAL_CASE}}Request
	if err := c.BodyParser(&inputRequest); err != nil {
		ctrl.log.Error(ctx, err.Error())
		return appErr.NewBadRequestErr(err)
	}

	validationErrs := ctrl.customValidation.ValidateStruct(inputRequest)
	if validationErrs != nil {
		return utils.WithFieldErrors(
			appErr.NewBadRequestErr(errors.New(consts.ErrValidationFailedMsg)),
			validationErrs...,
		)
	}
	
	// TODO: Map inputRequest to a dto.{{PASCAL_CASE}} struct.
	// Example:
	// entityDto := dto.{{PASCAL_CASE}}{
	// 	Name: inputRequest.Name,
	// }
	var entityDto dto.{{PASCAL_CASE}}


	createdEntity, err := ctrl.{{CAMEL_CASE}}Service.Create{{PASCAL_CASE}}(ctx, entityDto)
	if err != nil {
		return err
	}

	return c.Status(201).JSON(ports.Response{
		Status: true,
		Data:   createdEntity,
	})
}

// @Summary		Get {{PASCAL_CASE}} by ID
// @Description	This route will fetch a specific {{LOWER_CASE}} by its ID
// @Tags			{{PASCAL_CASE}}
// @Accept			json
// @Produce		json
// @Param			id	path		int	true	"{{PASCAL_CASE}} ID"
// @Success		200	{object}	ports.Response{data=dto.{{PASCAL_CASE}}}
// @Failure		400	{object}	ports.ErrorDetails
// @Failure		404	{object}	ports.ErrorDetails
// @Failure		500	{object}	ports.ErrorDetails
// @Router			/api/v1/{{KEBAB_CASE}}/{id} [get]
func (ctrl *{{CAMEL_CASE}}Controller) Get{{PASCAL_CASE}}ByID(c *ports.HttpContext) error {
	span, ctx := apm.StartSpan(c.Context(), "Get{{PASCAL_CASE}}ByID", "controller")
	defer span.End()

	id, err := c.ParamsInt("id")
	if err != nil {
		return appErr.NewBadRequestErr(err)
	}

	entity, err := ctrl.{{CAMEL_CASE}}Service.Get{{PASCAL_CASE}}ByID(ctx, int64(id))
	if err != nil {
		return err
	}

	return c.JSON(ports.Response{
		Status: true,
		Data:   entity,
	})
}

// @Summary		Update a {{PASCAL_CASE}}
// @Description	This route will update a {{LOWER_CASE}}
// @Tags			{{PASCAL_CASE}}
// @Accept			json
// @Produce		json
// @Param			id		path		int	true	"{{PASCAL_CASE}} ID"
// @Param			body	body		update{{PASCAL_CASE}}Request 	true	"Update {{PASCAL_CASE}} request"
// @Success		200		{object}	ports.Response{data=dto.{{PASCAL_CASE}}}
// @Failure		400		{object}	ports.ErrorDetails
// @Failure		422		{object}	ports.ErrorDetails
// @Failure		500		{object}	ports.ErrorDetails
// @Router			/api/v1/{{KEBAB_CASE}}/{id} [put]
func (ctrl *{{CAMEL_CASE}}Controller) Update{{PASCAL_CASE}}(c *ports.HttpContext) error {
	span, ctx := apm.StartSpan(c.Context(), "Update{{PASCAL_CASE}}", "controller")
	defer span.End()

	id, err := c.ParamsInt("id")
	if err != nil {
		return appErr.NewBadRequestErr(err)
	}

	var inputRequest update{{PASCAL_CASE}}Request
	if err := c.BodyParser(&inputRequest); err != nil {
		ctrl.log.Error(ctx, err.Error())
		return appErr.NewBadRequestErr(err)
	}

	validationErrs := ctrl.customValidation.ValidateStruct(inputRequest)
	if validationErrs != nil {
		return utils.WithFieldErrors(
			appErr.NewBadRequestErr(errors.New(consts.ErrValidationFailedMsg)),
			validationErrs...,
		)
	}
	
	// TODO: Map inputRequest to a dto.{{PASCAL_CASE}} struct.
	// Example:
	// entityDto := dto.{{PASCAL_CASE}}{
	// 	Name: inputRequest.Name,
	// }
	var entityDto dto.{{PASCAL_CASE}}
	entityDto.ID = int64(id) // Set ID from path

	result, err := ctrl.{{CAMEL_CASE}}Service.Update{{PASCAL_CASE}}(ctx, entityDto)
	if err != nil {
		return err
	}

	return c.JSON(ports.Response{
		Status: true,
		Data:   result,
	})
}

// @Summary		Delete a {{PASCAL_CASE}}
// @Description	This route will delete a {{LOWER_CASE}}
// @Tags			{{PASCAL_CASE}}
// @Accept			json
// @Produce		json
// @Param			id	path		int	true	"{{PASCAL_CASE}} ID"
// @Success		204
// @Failure		400	{object}	ports.ErrorDetails
// @Failure		500	{object}	ports.ErrorDetails
// @Router			/api/v1/{{KEBAB_CASE}}/{id} [delete]
func (ctrl *{{CAMEL_CASE}}Controller) Delete{{PASCAL_CASE}}(c *ports.HttpContext) error {
	span, ctx := apm.StartSpan(c.Context(), "Delete{{PASCAL_CASE}}", "controller")
	defer span.End()

	id, err := c.ParamsInt("id")
	if err != nil {
		return appErr.NewBadRequestErr(err)
	}

	err = ctrl.{{CAMEL_CASE}}Service.Delete{{PASCAL_CASE}}(ctx, int64(id))
	if err != nil {
		return err
	}

	return c.SendStatus(204)
}

// @Summary		Get All {{PASCAL_CASE}}s
// @Description	Get all paginated {{LOWER_CASE}}s
// @Tags			{{PASCAL_CASE}}
// @Accept			json
// @Produce		json
// @Param			params	query		httpUtils.ListRequest	false	"Pagination and filter parameters"
// @Success		200		{object}	ports.Response{data=[]dto.{{PASCAL_CASE}}}
// @Failure		400	{object}	ports.ErrorDetails
// @Failure		500	{object}	ports.ErrorDetails
// @Router			/api/v1/{{KEBAB_CASE}}/ [get]
func (ctrl *{{CAMEL_CASE}}Controller) GetPaginated{{PASCAL_CASE}}s(c *ports.HttpContext) error {
	span, ctx := apm.StartSpan(c.Context(), "GetPaginated{{PASCAL_CASE}}s", "controller")
	defer span.End()
	
	// IMPORTANT: Define your filterable and sortable columns here
	columnMapping := map[string]string{
		// "fieldNameInQuery": "db_column_name",
		// "name": "title",
	}

	pagination, err := httpUtils.ParseAndValidatePagination(ctx, c, ctrl.customValidation, ctrl.log, columnMapping)
	if err != nil {
		return err
	}

	paginatedResult, resultPagination, err := ctrl.{{CAMEL_CASE}}Service.GetPaginated{{PASCAL_CASE}}s(ctx, pagination)
	if err != nil {
		return err
	}

	resp := ports.Response{
		Data: paginatedResult,
		Meta: &ports.Meta{
			Pagination: &resultPagination.Pagination,
		},
	}

	return c.JSON(resp)
}
"#;
