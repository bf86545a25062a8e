//! 外部コマンドによる画像分類
//!
//! 設定された分類コマンドに画像パスを最後の引数として渡し、
//! 標準出力のJSON（`{label, score}` またはその配列）からトップ1を取り出す。

use crate::config::Config;
use crate::error::{RecycleVisionError, Result};
use recycle_vision_common::{
    parse_classifier_output, ClassificationResult, Classifier, Error, ImageHandle,
};
use tokio::process::Command;

#[derive(Debug, Clone)]
pub struct CommandClassifier {
    command: String,
    args: Vec<String>,
    verbose: bool,
}

impl CommandClassifier {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
            verbose: false,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let command = config
            .classifier_command
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .ok_or(RecycleVisionError::MissingClassifier)?;
        Ok(Self::new(command, config.classifier_args.clone()))
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    fn build_command(&self, image: &ImageHandle) -> Command {
        // Windowsではcmd /c経由
        #[cfg(windows)]
        let mut command = {
            let mut c = Command::new("cmd");
            c.arg("/c").arg(&self.command);
            c
        };

        #[cfg(not(windows))]
        let mut command = Command::new(&self.command);

        command.args(&self.args).arg(image.as_str());
        command
    }
}

impl Classifier for CommandClassifier {
    async fn classify(
        &self,
        image: &ImageHandle,
    ) -> recycle_vision_common::Result<ClassificationResult> {
        if self.verbose {
            println!("  分類コマンド: {} {:?} {}", self.command, self.args, image);
        }

        let output = self
            .build_command(image)
            .output()
            .await
            .map_err(|e| Error::Classification(format!("{}: {}", self.command, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Classification(format!(
                "classifier failed (code {:?}): {}",
                output.status.code(),
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);

        if self.verbose {
            let preview: String = stdout.chars().take(500).collect();
            println!("  レスポンス: {}", preview.trim());
        }

        parse_classifier_output(&stdout)
    }
}
