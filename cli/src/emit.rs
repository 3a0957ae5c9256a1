#![deny(missing_docs)]

//! # File Emission
//!
//! Wraps rendered schema entries into a complete Go source file, names the
//! output file, and runs `gofmt` on the result.
//!
//! The file-level template lives here, away from the core: the core renders
//! individual entries, this module owns everything around them.

use crate::error::{CliError, CliResult};
use colored::Colorize;
use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Output};
use tfgen_core::{render_field, underscore, Translation};

/// Interface for executing the formatter command.
///
/// Abstracted to allow mocking command execution in tests without requiring
/// `gofmt` to be installed.
pub trait CommandExecutor {
    /// Executes the command and returns the output.
    fn execute(&self, program: &str, args: &[&str]) -> CliResult<Output>;
}

/// Standard executor using `std::process::Command`.
pub struct ShellExecutor;

impl CommandExecutor for ShellExecutor {
    fn execute(&self, program: &str, args: &[&str]) -> CliResult<Output> {
        let output = Command::new(program).args(args).output()?;
        Ok(output)
    }
}

/// Computes the output file name for one generated resource,
/// e.g. `resource_compute_forwarding_rule.go`.
pub fn resource_file_name(api: &str, resource: &str) -> String {
    format!("resource_{}_{}.go", api, underscore(resource))
}

/// Renders the complete Go source file for one translated resource.
pub fn render_document(api: &str, resource: &str, translation: &Translation) -> CliResult<String> {
    let mut entries = String::new();
    for (name, descriptor) in &translation.fields {
        let rendered = render_field(name, descriptor).map_err(CliError::Core)?;
        for line in rendered.lines() {
            entries.push_str("\t\t\t");
            entries.push_str(line);
            entries.push('\n');
        }
    }

    Ok(format!(
        "package {api}\n\
         \n\
         import (\n\
         \t\"github.com/hashicorp/terraform-plugin-sdk/v2/helper/schema\"\n\
         )\n\
         \n\
         func resource{api_export}{resource}() *schema.Resource {{\n\
         \treturn &schema.Resource{{\n\
         \t\tSchema: map[string]*schema.Schema{{\n\
         {entries}\
         \t\t}},\n\
         \t}}\n\
         }}\n",
        api = api,
        api_export = export_name(api),
        resource = resource,
        entries = entries,
    ))
}

/// Runs `gofmt -w` on the emitted file through the given executor.
///
/// A missing formatter only produces a warning; a formatter that runs and
/// fails is an error, since the file is then known to be malformed.
pub fn format_file<E: CommandExecutor>(path: &Path, executor: &E) -> CliResult<()> {
    let path_str = path.to_string_lossy();

    match executor.execute("gofmt", &["-w", &path_str]) {
        Ok(output) if output.status.success() => Ok(()),
        Ok(output) => Err(CliError::General(format!(
            "gofmt failed with status {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr)
        ))),
        Err(CliError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            eprintln!(
                "{} gofmt not found; leaving {} unformatted",
                "warning:".yellow().bold(),
                path.display()
            );
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Capitalizes an API identifier for use in an exported Go name.
fn export_name(id: &str) -> String {
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::os::unix::process::ExitStatusExt;
    use std::process::ExitStatus;
    use tfgen_core::{translate, SchemaGraph};

    // Mock Executor to capture commands
    struct MockExecutor {
        last_command: RefCell<Option<(String, Vec<String>)>>,
        should_fail: bool,
    }

    impl MockExecutor {
        fn new(should_fail: bool) -> Self {
            Self {
                last_command: RefCell::new(None),
                should_fail,
            }
        }
    }

    impl CommandExecutor for MockExecutor {
        fn execute(&self, program: &str, args: &[&str]) -> CliResult<Output> {
            self.last_command.borrow_mut().replace((
                program.to_string(),
                args.iter().map(|s| s.to_string()).collect(),
            ));

            let status = if self.should_fail {
                ExitStatus::from_raw(1)
            } else {
                ExitStatus::from_raw(0)
            };

            Ok(Output {
                status,
                stdout: Vec::new(),
                stderr: if self.should_fail {
                    b"Mock Error".to_vec()
                } else {
                    Vec::new()
                },
            })
        }
    }

    struct MissingExecutor;

    impl CommandExecutor for MissingExecutor {
        fn execute(&self, _program: &str, _args: &[&str]) -> CliResult<Output> {
            Err(std::io::Error::new(ErrorKind::NotFound, "no gofmt").into())
        }
    }

    #[test]
    fn test_resource_file_name() {
        assert_eq!(
            resource_file_name("compute", "ForwardingRule"),
            "resource_compute_forwarding_rule.go"
        );
        assert_eq!(resource_file_name("dns", "ManagedZone"), "resource_dns_managed_zone.go");
    }

    #[test]
    fn test_render_document_wraps_entries() {
        let graph: SchemaGraph = serde_json::from_str(
            r#"{
            "Address": {
                "type": "object",
                "properties": {
                    "name": { "type": "string", "required": true },
                    "address": { "type": "string", "readOnly": true }
                }
            }
        }"#,
        )
        .unwrap();
        let translation = translate(&graph, "Address").unwrap();

        let source = render_document("compute", "Address", &translation).unwrap();

        assert!(source.starts_with("package compute\n"));
        assert!(source.contains("github.com/hashicorp/terraform-plugin-sdk/v2/helper/schema"));
        assert!(source.contains("func resourceComputeAddress() *schema.Resource {"));
        // Entries are sorted: "address" before "name"
        let address_pos = source.find("\"address\": {").unwrap();
        let name_pos = source.find("\"name\": {").unwrap();
        assert!(address_pos < name_pos);
        assert!(source.contains("Computed: true,"));
        assert!(source.contains("Required: true,"));
    }

    #[test]
    fn test_format_file_invokes_gofmt() {
        let executor = MockExecutor::new(false);
        let path = Path::new("out/resource_compute_address.go");

        format_file(path, &executor).unwrap();

        let (program, args) = executor.last_command.take().expect("command not captured");
        assert_eq!(program, "gofmt");
        assert_eq!(args[0], "-w");
        assert!(args[1].ends_with("resource_compute_address.go"));
    }

    #[test]
    fn test_format_file_failure_is_fatal() {
        let executor = MockExecutor::new(true);
        let res = format_file(Path::new("x.go"), &executor);

        match res.unwrap_err() {
            CliError::General(msg) => {
                assert!(msg.contains("gofmt failed"));
                assert!(msg.contains("Mock Error"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_missing_formatter_is_only_a_warning() {
        let res = format_file(Path::new("x.go"), &MissingExecutor);
        assert!(res.is_ok());
    }
}
