use anyhow::Result;
use clap::ArgMatches;
use serde::Serialize;
use std::path::Path;

use gocrud_gen::{
    EntityName, GenerationReport, NameForms, TaskEvent, TaskOutcome, TemplateRegistry,
    generate_with_progress,
};

use crate::cli::{self, utils};

const CONTROLLER_DIR: &str = "internal/transport/http/rest/controller/v1";

#[derive(Serialize)]
struct JsonSummary<'a> {
    entity: &'a NameForms,
    root: &'a Path,
    outcomes: &'a [TaskOutcome],
    error: Option<String>,
}

pub fn handle_crud(matches: &ArgMatches) -> Result<()> {
    let raw = matches
        .get_one::<String>("entity")
        .map(String::as_str)
        .unwrap_or_default();
    let entity = EntityName::new(raw)?;

    let config = cli::load_config(matches)?;
    let json = matches.get_flag("json");
    let forms = NameForms::derive(&entity);
    let registry = TemplateRegistry::default();
    let root = config.output.root.as_path();

    if !json {
        println!("--- Generating CRUD for entity: {} ---", forms.pascal);
    }

    let outcome = generate_with_progress(root, &forms, &registry, |event| {
        if !json {
            print_event(event, root);
        }
    });

    match outcome {
        Ok(report) => {
            if json {
                print_json(&forms, root, &report, None)?;
            } else {
                print_success_message(&forms, &report);
            }
            Ok(())
        }
        Err(aborted) => {
            if json {
                let message = utils::error_chain(&aborted.source);
                print_json(&forms, root, &aborted.report, Some(message))?;
            }
            Err(aborted.into())
        }
    }
}

fn print_event(event: TaskEvent<'_>, root: &Path) {
    match event {
        TaskEvent::Generating { path, .. } => {
            println!("Generating file: {}", utils::display_relative(path, root))
        }
        TaskEvent::Skipping { path, .. } => {
            println!("Skipping existing file: {}.", utils::display_relative(path, root))
        }
        TaskEvent::Failed { path: Some(path), .. } => {
            println!("Error generating {}", utils::display_relative(path, root))
        }
        TaskEvent::Failed { task, path: None } => println!("Error generating {} file", task),
    }
}

fn print_json(
    forms: &NameForms,
    root: &Path,
    report: &GenerationReport,
    error: Option<String>,
) -> Result<()> {
    let summary = JsonSummary {
        entity: forms,
        root,
        outcomes: &report.outcomes,
        error,
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn print_success_message(forms: &NameForms, report: &GenerationReport) {
    println!("--- CRUD for {} generated successfully! ---", forms.pascal);
    println!(
        "{} created, {} skipped.",
        utils::pluralize("file", report.created().count()),
        report.skipped().count()
    );
    println!("Next steps:");
    println!(
        "1. Define the 'dto.{}' struct in a relevant DTO file \
         and ensure it implements 'dto.Entity'.",
        forms.pascal
    );
    println!(
        "2. Populate the request structs in '{}/{}/request.go'.",
        CONTROLLER_DIR, forms.lower
    );
    println!(
        "3. Implement the TODOs in the generated controller to map request structs to your DTO."
    );
    println!(
        "4. Add the new controller, service, and repository \
         to the initializers in 'internal/initializer/app.go'."
    );
    println!(
        "5. Add the new routes to the router in 'internal/transport/http/rest/router/route.go'."
    );
    println!("6. Update the ColumnMapping in the generated controller for filtering and sorting.");
}
