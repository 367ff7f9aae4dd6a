//! End-to-end runs of the prompt pipeline with real adapters.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use breakdown_adapters::{
    ConfigLoader, DEFAULT_PROFILE, MemoryFilesystem, ProfilePatternProvider, SimpleRenderer,
};
use breakdown_core::prelude::*;
use tempfile::TempDir;

fn service(profile: &ProfilePatternProvider, fs: &MemoryFilesystem) -> PromptService {
    PromptService::new(
        TypeFactory::new(Box::new(profile.clone())),
        VariablesFactory::new(Box::new(fs.clone())),
        Box::new(fs.clone()),
        Box::new(SimpleRenderer::new()),
    )
}

#[test]
fn default_profile_renders_convention_template() {
    let dir = TempDir::new().unwrap();
    let loader = ConfigLoader::new(dir.path()).with_environment(HashMap::new());
    let profile = loader.load(DEFAULT_PROFILE).unwrap();
    let provider = ProfilePatternProvider::from_config(DEFAULT_PROFILE, &profile);

    let fs = MemoryFilesystem::new()
        .with_file("prompts/to/project/f_project.md", "Project from: {input_text}");
    let svc = service(&provider, &fs);

    let input = TwoTokenInput::new("to", "project", CommandOptions::new());
    let out = svc
        .execute(&profile.to_path_config("/work"), &input, Some("notes"))
        .unwrap();
    assert_eq!(out.content, "Project from: notes");

    let written = svc.write_output(&out.parameters, &out.content).unwrap();
    assert!(written.starts_with("output/to/project"));
    assert_eq!(fs.read_file(&written).as_deref(), Some("Project from: notes"));
}

#[test]
fn named_profile_restricts_tokens() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("production-app.yml"),
        r#"
working_dir: /srv
app_prompt: { base_dir: p }
app_schema: { base_dir: s }
app_input:  { base_dir: i }
app_output: { base_dir: o }
params:
  two:
    directive_type: { pattern: "^to$" }
    layer_type:     { pattern: "^(project|task)$" }
"#,
    )
    .unwrap();

    let loader = ConfigLoader::new(dir.path()).with_environment(HashMap::new());
    let profile = loader.load("production").unwrap();
    let provider = ProfilePatternProvider::from_config("production", &profile);
    let svc = service(&provider, &MemoryFilesystem::new());
    let config = profile.to_path_config(".");

    let err = svc
        .prepare(&config, &TwoTokenInput::new("summary", "task", CommandOptions::new()))
        .unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Validation);

    let bag = svc
        .prepare(&config, &TwoTokenInput::new("to", "task", CommandOptions::new()))
        .unwrap();
    assert_eq!(bag.prompt_path().as_str(), "/srv/p/to/task/f_task.md");
    assert_eq!(bag.schema_path().as_str(), "/srv/s/to/task/base.schema.md");
}

#[test]
fn profile_working_dir_is_one_root_for_templates_and_inputs() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("default-app.yml"), "working_dir: /srv/docs\n").unwrap();
    let profile = ConfigLoader::new(dir.path())
        .with_environment(HashMap::new())
        .load(DEFAULT_PROFILE)
        .unwrap();
    let provider = ProfilePatternProvider::from_config(DEFAULT_PROFILE, &profile);

    let fs = MemoryFilesystem::new()
        .with_file("/srv/docs/prompts/to/project/f_project.md", "<{input_text}>")
        .with_file("/srv/docs/docs/a.md", "body");
    let options = CommandOptions::new().with_from_file("docs/a.md");
    let out = service(&provider, &fs)
        .execute(
            &profile.to_path_config("/elsewhere"),
            &TwoTokenInput::new("to", "project", options),
            None,
        )
        .unwrap();

    assert_eq!(
        out.parameters.prompt_path().as_str(),
        "/srv/docs/prompts/to/project/f_project.md"
    );
    assert_eq!(out.parameters.input_path().as_str(), "/srv/docs/docs/a.md");
    assert!(out.parameters.output_path().as_str().starts_with("/srv/docs/output/to/project/"));
    assert_eq!(out.content, "<body>");
}

#[test]
fn named_profile_without_base_dirs_is_incomplete() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("lean-app.yml"),
        "params:\n  two:\n    directive_type: { pattern: \"^to$\" }\n    layer_type: { pattern: \"^task$\" }\n",
    )
    .unwrap();

    let profile = ConfigLoader::new(dir.path())
        .with_environment(HashMap::new())
        .load("lean")
        .unwrap();
    let provider = ProfilePatternProvider::from_config("lean", &profile);
    let err = service(&provider, &MemoryFilesystem::new())
        .prepare(
            &profile.to_path_config("."),
            &TwoTokenInput::new("to", "task", CommandOptions::new()),
        )
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Configuration);
    match err {
        BreakdownError::Application(app) => assert!(matches!(
            app.root_cause(),
            ApplicationError::ConfigurationIncomplete {
                field: ConfigField::PromptBaseDir,
                ..
            }
        )),
        other => panic!("expected application error, got {other:?}"),
    }
}

#[test]
fn destination_directory_on_disk_gets_generated_name() {
    let out_dir = TempDir::new().unwrap();
    let provider = ProfilePatternProvider::from_config(
        DEFAULT_PROFILE,
        &ConfigLoader::new(out_dir.path())
            .with_environment(HashMap::new())
            .load(DEFAULT_PROFILE)
            .unwrap(),
    );
    let factory = TypeFactory::new(Box::new(provider));
    let pair = factory.create_both_types("defect", "issue").unwrap();

    let destination = out_dir.path().to_str().unwrap().to_string();
    let bag = VariablesFactory::new(Box::new(breakdown_adapters::LocalFilesystem::new()))
        .assemble(
            &PathConfig::new()
                .with_working_dir(".")
                .with_prompt_base_dir("prompts")
                .with_schema_base_dir("schema")
                .with_output_base_dir("output"),
            &pair,
            &CommandOptions::new().with_destination_file(destination.clone()),
        )
        .unwrap();

    assert_eq!(bag.output_path().kind(), PathKind::AutoGenerated);
    assert_eq!(
        bag.output_path().as_path().parent(),
        Some(Path::new(&destination))
    );
}
