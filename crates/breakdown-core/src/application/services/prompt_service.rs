//! Prompt Service - main application orchestrator.
//!
//! This service coordinates one breakdown invocation:
//! 1. Validate the directive/layer tokens
//! 2. Resolve the four paths into a parameter bag
//! 3. Load the template and input document, render
//! 4. Write the artifact (or hand it back to the caller)

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer},
        services::{type_factory::TypeFactory, variables_factory::VariablesFactory},
    },
    domain::{ParameterBag, PathConfig, TwoTokenInput},
    error::BreakdownResult,
};

/// A rendered prompt together with the parameters that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPrompt {
    pub parameters: ParameterBag,
    pub content: String,
}

/// Main prompt service.
pub struct PromptService {
    factory: TypeFactory,
    variables: VariablesFactory,
    filesystem: Box<dyn Filesystem>,
    renderer: Box<dyn TemplateRenderer>,
}

impl PromptService {
    pub fn new(
        factory: TypeFactory,
        variables: VariablesFactory,
        filesystem: Box<dyn Filesystem>,
        renderer: Box<dyn TemplateRenderer>,
    ) -> Self {
        Self {
            factory,
            variables,
            filesystem,
            renderer,
        }
    }

    /// Profile the token patterns come from.
    pub fn profile_name(&self) -> String {
        self.factory.profile_name()
    }

    /// Validate the tokens and resolve every path. No file is touched
    /// beyond the advisory directory checks.
    #[instrument(
        skip_all,
        fields(directive = %input.directive, layer = %input.layer)
    )]
    pub fn prepare(
        &self,
        config: &PathConfig,
        input: &TwoTokenInput,
    ) -> BreakdownResult<ParameterBag> {
        let pair = self
            .factory
            .create_both_types(&input.directive, &input.layer)?;
        self.factory.validate_options(&input.options)?;
        let bag = self.variables.assemble(config, &pair, &input.options)?;
        Ok(bag)
    }

    /// Load the template and input, then render.
    ///
    /// When the input path is stdin, `stdin_text` is used as the input
    /// document; `None` leaves `{input_text}` unset.
    #[instrument(skip_all, fields(template = %bag.prompt_path()))]
    pub fn render(&self, bag: &ParameterBag, stdin_text: Option<&str>) -> BreakdownResult<String> {
        let template_path = bag.prompt_path().as_path();
        if !self.filesystem.exists(template_path) {
            return Err(ApplicationError::TemplateNotFound {
                path: template_path.to_path_buf(),
            }
            .into());
        }
        let template = self.filesystem.read_to_string(template_path)?;

        let input_text = if bag.input_path().is_stdin() {
            stdin_text.map(str::to_string)
        } else {
            Some(self.read_input(bag.input_path().as_path())?)
        };

        let variables = bag.variables(input_text.as_deref());
        debug!(count = variables.len(), "Rendering template");
        self.renderer.render(&template, &variables)
    }

    /// Write rendered content to the bag's output path, creating parent
    /// directories as needed.
    #[instrument(skip_all, fields(output = %bag.output_path()))]
    pub fn write_output(&self, bag: &ParameterBag, content: &str) -> BreakdownResult<PathBuf> {
        let path = bag.output_path().as_path();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.write_file(path, content)?;
        info!(path = %path.display(), "Artifact written");
        Ok(path.to_path_buf())
    }

    /// Prepare and render in one step.
    pub fn execute(
        &self,
        config: &PathConfig,
        input: &TwoTokenInput,
        stdin_text: Option<&str>,
    ) -> BreakdownResult<RenderedPrompt> {
        let parameters = self.prepare(config, input)?;
        let content = self.render(&parameters, stdin_text)?;
        Ok(RenderedPrompt {
            parameters,
            content,
        })
    }

    fn read_input(&self, path: &Path) -> BreakdownResult<String> {
        if !self.filesystem.exists(path) {
            return Err(ApplicationError::InputNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }
        self.filesystem.read_to_string(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeMap, HashMap};
    use std::sync::{Arc, Mutex};

    use crate::application::ports::{MockDirectoryProbe, MockPatternProvider};
    use crate::domain::{CommandOptions, DomainError, TypePattern};
    use crate::error::{BreakdownError, ErrorCategory};

    /// Shared-state filesystem so tests can inspect writes.
    #[derive(Clone, Default)]
    struct FakeFs {
        files: Arc<Mutex<HashMap<PathBuf, String>>>,
    }

    impl FakeFs {
        fn with(self, path: &str, content: &str) -> Self {
            self.files
                .lock()
                .unwrap()
                .insert(PathBuf::from(path), content.to_string());
            self
        }

        fn get(&self, path: &str) -> Option<String> {
            self.files.lock().unwrap().get(Path::new(path)).cloned()
        }
    }

    impl Filesystem for FakeFs {
        fn read_to_string(&self, path: &Path) -> BreakdownResult<String> {
            self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
                ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "missing".into(),
                }
                .into()
            })
        }

        fn write_file(&self, path: &Path, content: &str) -> BreakdownResult<()> {
            self.files
                .lock()
                .unwrap()
                .insert(path.to_path_buf(), content.to_string());
            Ok(())
        }

        fn create_dir_all(&self, _path: &Path) -> BreakdownResult<()> {
            Ok(())
        }

        fn exists(&self, path: &Path) -> bool {
            self.files.lock().unwrap().contains_key(path)
        }
    }

    /// `{name}` substitution, enough for these tests.
    struct BraceRenderer;

    impl TemplateRenderer for BraceRenderer {
        fn render(
            &self,
            template: &str,
            variables: &BTreeMap<String, String>,
        ) -> BreakdownResult<String> {
            Ok(variables.iter().fold(template.to_string(), |acc, (k, v)| {
                acc.replace(&format!("{{{k}}}"), v)
            }))
        }
    }

    fn service(fs: FakeFs) -> PromptService {
        let mut provider = MockPatternProvider::new();
        provider
            .expect_directive_pattern()
            .returning(|| Some(TypePattern::new("^(to|summary|defect)$").unwrap()));
        provider
            .expect_layer_pattern()
            .returning(|| Some(TypePattern::new("^(project|issue|task)$").unwrap()));
        provider
            .expect_profile_name()
            .returning(|| "default".to_string());

        let mut probe = MockDirectoryProbe::new();
        probe.expect_is_directory().returning(|_| false);

        PromptService::new(
            TypeFactory::new(Box::new(provider)),
            VariablesFactory::new(Box::new(probe)),
            Box::new(fs),
            Box::new(BraceRenderer),
        )
    }

    fn config() -> PathConfig {
        PathConfig::new()
            .with_working_dir("/work")
            .with_prompt_base_dir("prompts")
            .with_schema_base_dir("schema")
            .with_input_base_dir("input")
            .with_output_base_dir("output")
    }

    #[test]
    fn renders_template_with_stdin_input() {
        let fs = FakeFs::default().with(
            "prompts/to/project/f_project.md",
            "{directive}/{layer}: {input_text}",
        );
        let input = TwoTokenInput::new("to", "project", CommandOptions::new());

        let out = service(fs).execute(&config(), &input, Some("hello")).unwrap();
        assert_eq!(out.content, "to/project: hello");
        assert!(out.parameters.input_path().is_stdin());
    }

    #[test]
    fn reads_input_file_when_given() {
        let fs = FakeFs::default()
            .with("prompts/summary/issue/f_issue.md", "[{input_text}]")
            .with("/work/docs/bug.md", "crash on save");
        let options = CommandOptions::new().with_from_file("docs/bug.md");
        let input = TwoTokenInput::new("summary", "issue", options);

        let out = service(fs).execute(&config(), &input, None).unwrap();
        assert_eq!(out.content, "[crash on save]");
    }

    #[test]
    fn missing_template_is_not_found() {
        let input = TwoTokenInput::new("to", "task", CommandOptions::new());
        let err = service(FakeFs::default())
            .execute(&config(), &input, None)
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(matches!(
            err,
            BreakdownError::Application(ApplicationError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn missing_input_is_not_found() {
        let fs = FakeFs::default().with("prompts/to/task/f_task.md", "x");
        let options = CommandOptions::new().with_from_file("/nowhere/in.md");
        let input = TwoTokenInput::new("to", "task", options);
        let err = service(fs).execute(&config(), &input, None).unwrap_err();
        assert_eq!(
            err,
            BreakdownError::Application(ApplicationError::InputNotFound {
                path: PathBuf::from("/nowhere/in.md"),
            })
        );
    }

    #[test]
    fn invalid_directive_fails_before_any_io() {
        let input = TwoTokenInput::new("explode", "project", CommandOptions::new());
        let err = service(FakeFs::default())
            .prepare(&config(), &input)
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn writes_output_to_destination() {
        let fs = FakeFs::default();
        let svc = service(fs.clone());
        let options = CommandOptions::new().with_destination_file("/abs/out.md");
        let bag = svc
            .prepare(&config(), &TwoTokenInput::new("to", "project", options))
            .unwrap();

        let written = svc.write_output(&bag, "done").unwrap();
        assert_eq!(written, PathBuf::from("/abs/out.md"));
        assert_eq!(fs.get("/abs/out.md").as_deref(), Some("done"));
    }

    #[test]
    fn prompt_options_cannot_leave_the_template_tree() {
        let svc = service(FakeFs::default());
        for options in [
            CommandOptions::new().with_input("x/../../../../etc/passwd"),
            CommandOptions::new().with_adaptation("a/../../../../../tmp/evil"),
        ] {
            let err = svc
                .prepare(&config(), &TwoTokenInput::new("to", "task", options))
                .unwrap_err();
            assert!(matches!(
                err,
                BreakdownError::Domain(DomainError::UnsafeOptionValue { .. })
            ));
        }
    }

    #[test]
    fn unknown_source_layer_is_rejected() {
        let options = CommandOptions::new().with_input("epic");
        let err = service(FakeFs::default())
            .prepare(&config(), &TwoTokenInput::new("to", "task", options))
            .unwrap_err();
        assert_eq!(err.category(), ErrorCategory::Validation);
        assert!(matches!(
            err,
            BreakdownError::Domain(DomainError::PatternMismatch { ref value, .. }) if value == "epic"
        ));
    }
}
