//! PDF backend driving the `wkhtmltopdf` executable.
//!
//! The assembled markdown is converted to an HTML page and piped to the
//! process on stdin (`-` as input); the PDF is written straight to the
//! destination path by the process itself.

use super::Renderer;
use super::html::to_html_page;
use super::options::RenderOptions;
use crate::error::RenderError;
use crate::utils::truncate_for_log;
use std::io::ErrorKind;
use std::path::Path;
use std::process::Stdio;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, info, instrument};

pub const DEFAULT_PROGRAM: &str = "wkhtmltopdf";

const MAX_STDERR: usize = 2000;

/// Renders through an external `wkhtmltopdf` process.
#[derive(Debug, Clone)]
pub struct WkhtmltopdfRenderer {
    program: String,
}

impl Default for WkhtmltopdfRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl WkhtmltopdfRenderer {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Command-line arguments for one render, stdin as input.
    pub fn args(&self, options: &RenderOptions, dest: &Path) -> Vec<String> {
        let mut args: Vec<String> = vec![
            "--quiet".into(),
            // A stylesheet import that cannot load (offline) must not fail the render.
            "--load-error-handling".into(),
            "ignore".into(),
            "--load-media-error-handling".into(),
            "ignore".into(),
            "--encoding".into(),
            "utf-8".into(),
            "--page-size".into(),
            options.page_format.as_str().into(),
            "--margin-top".into(),
            options.margins.top.into(),
            "--margin-right".into(),
            options.margins.right.into(),
            "--margin-bottom".into(),
            options.margins.bottom.into(),
            "--margin-left".into(),
            options.margins.left.into(),
            if options.print_background {
                "--background".into()
            } else {
                "--no-background".into()
            },
            "--header-center".into(),
            options.header.resolve("[page]", "[topage]"),
            "--header-font-size".into(),
            options.header.font_size_px.to_string(),
            "--footer-center".into(),
            options.footer.resolve("[page]", "[topage]"),
            "--footer-font-size".into(),
            options.footer.font_size_px.to_string(),
        ];
        args.push("-".into());
        args.push(dest.to_string_lossy().into_owned());
        args
    }
}

impl Renderer for WkhtmltopdfRenderer {
    #[instrument(level = "info", skip_all, fields(program = %self.program, dest = %dest.display()))]
    async fn render(
        &self,
        markdown: &str,
        options: &RenderOptions,
        dest: &Path,
    ) -> Result<(), RenderError> {
        let page = to_html_page(markdown, options);
        let args = self.args(options, dest);
        debug!(?args, html_bytes = page.len(), "Launching renderer");

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| RenderError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| RenderError::Other("failed to capture renderer stdin".into()))?;
        // Feed stdin while stderr is drained, so a chatty backend cannot
        // fill its stderr pipe and stall before reading the page.
        let writer = tokio::spawn(async move {
            let result = stdin.write_all(page.as_bytes()).await;
            drop(stdin);
            result
        });

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            return Err(RenderError::Failed {
                status: output.status,
                stderr: truncate_for_log(
                    String::from_utf8_lossy(&output.stderr).trim(),
                    MAX_STDERR,
                ),
            });
        }

        match writer.await {
            Ok(Ok(())) => {}
            // Exited successfully without reading all of stdin.
            Ok(Err(e)) if e.kind() == ErrorKind::BrokenPipe => {}
            Ok(Err(e)) => return Err(e.into()),
            Err(e) => return Err(RenderError::Other(format!("stdin writer failed: {e}"))),
        }

        match fs::metadata(dest).await {
            Ok(meta) if meta.is_file() => {
                info!("Renderer finished");
                Ok(())
            }
            Ok(_) => Err(RenderError::MissingOutput(dest.to_path_buf())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(RenderError::MissingOutput(dest.to_path_buf()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after<'a>(args: &'a [String], flag: &str) -> &'a str {
        let i = args.iter().position(|a| a == flag).unwrap();
        &args[i + 1]
    }

    #[test]
    fn args_carry_page_setup_and_paths() {
        let renderer = WkhtmltopdfRenderer::default();
        let args = renderer.args(&RenderOptions::default(), Path::new("/tmp/out.pdf"));

        assert_eq!(after(&args, "--page-size"), "A4");
        assert_eq!(after(&args, "--margin-top"), "20mm");
        assert_eq!(after(&args, "--margin-right"), "15mm");
        assert_eq!(after(&args, "--footer-center"), "[page] / [topage]");
        assert_eq!(after(&args, "--header-center"), "UUTIK - Контекст и профили");
        assert_eq!(after(&args, "--load-error-handling"), "ignore");
        assert_eq!(after(&args, "--load-media-error-handling"), "ignore");
        assert!(args.contains(&"--background".to_string()));
        assert_eq!(&args[args.len() - 2..], ["-", "/tmp/out.pdf"]);
    }

    #[tokio::test]
    async fn missing_program_is_a_spawn_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let renderer = WkhtmltopdfRenderer::new("definitely-not-a-real-renderer-binary");

        let err = renderer
            .render(
                "# Title",
                &RenderOptions::default(),
                &temp_dir.path().join("out.pdf"),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RenderError::Spawn { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn non_zero_exit_is_a_failure() {
        let temp_dir = tempfile::tempdir().unwrap();
        let renderer = WkhtmltopdfRenderer::new("false");

        let err = renderer
            .render(
                "# Title",
                &RenderOptions::default(),
                &temp_dir.path().join("out.pdf"),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, RenderError::Failed { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn success_without_a_file_is_missing_output() {
        let temp_dir = tempfile::tempdir().unwrap();
        let dest = temp_dir.path().join("out.pdf");
        let renderer = WkhtmltopdfRenderer::new("true");

        let err = renderer
            .render("# Title", &RenderOptions::default(), &dest)
            .await
            .unwrap_err();

        assert!(matches!(err, RenderError::MissingOutput(ref path) if *path == dest));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn large_stderr_before_reading_stdin_does_not_stall() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempfile::tempdir().unwrap();
        let script = temp_dir.path().join("noisy-renderer");
        std::fs::write(
            &script,
            "#!/bin/sh\nhead -c 200000 /dev/zero | tr '\\0' 'e' >&2\ncat > /dev/null\nexit 3\n",
        )
        .unwrap();
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let renderer = WkhtmltopdfRenderer::new(script.to_string_lossy());
        let markdown = "word ".repeat(100_000);
        let result = tokio::time::timeout(
            std::time::Duration::from_secs(30),
            renderer.render(
                &markdown,
                &RenderOptions::default(),
                &temp_dir.path().join("out.pdf"),
            ),
        )
        .await
        .expect("renderer must not stall");

        match result {
            Err(RenderError::Failed { stderr, .. }) => {
                assert!(stderr.starts_with("eeee"));
                assert!(stderr.contains("bytes)"));
            }
            other => panic!("expected Failed, got {other:?}"),
        }
    }
}
