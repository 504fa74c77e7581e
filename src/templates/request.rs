//! Request DTO stubs for the controller.

pub const PATH: &str = "internal/transport/http/rest/controller/v1/{{CAMEL_CASE}}/request.go";

pub const BODY: &str = r#"package {{LOWER_CASE}}

type create{{PASCAL_CASE}}Request struct {
	// TODO: Add fields for creating a new {{PASCAL_CASE}}.
	// Example:
	// Name string `json:"name" validate:"required"`
}

type update{{PASCAL_CASE}}Request struct {
	// TODO: Add fields for updating an existing {{PASCAL_CASE}}.
	// Example:
	// Name string `json:"name" validate:"required"`
}
"#;
