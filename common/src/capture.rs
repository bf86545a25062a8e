//! 画像取得の状態機械
//!
//! アップロードとカメラの2モード。
//! Idle → (ファイル選択 | カメラ許可) → Streaming → 処理中 → 画像を通知 → Idle/Streaming
//!
//! 失敗状態は持たず、エラー時は直前の操作可能な状態へ戻る。
//! 待ち時間やカメラ操作そのものはプラットフォーム側が行う。

use crate::notification::Notification;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureMode {
    #[default]
    Upload,
    Camera,
}

impl CaptureMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CaptureMode::Upload => "upload",
            CaptureMode::Camera => "camera",
        }
    }

    pub fn tab_label(&self) -> &'static str {
        match self {
            CaptureMode::Upload => "Upload Photo",
            CaptureMode::Camera => "Use Camera",
        }
    }
}

/// 画像の取得元
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureSource {
    File,
    Camera,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturePhase {
    Idle,
    Streaming,
    Processing,
}

/// プラットフォーム側で実行すべきカメラ操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraCommand {
    Start,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaptureState {
    mode: CaptureMode,
    camera_active: bool,
    /// カメラ許可を待っている間 true
    camera_starting: bool,
    processing: bool,
}

impl CaptureState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> CaptureMode {
        self.mode
    }

    pub fn is_camera_active(&self) -> bool {
        self.camera_active
    }

    pub fn is_camera_starting(&self) -> bool {
        self.camera_starting
    }

    pub fn is_processing(&self) -> bool {
        self.processing
    }

    pub fn phase(&self) -> CapturePhase {
        if self.processing {
            CapturePhase::Processing
        } else if self.camera_active {
            CapturePhase::Streaming
        } else {
            CapturePhase::Idle
        }
    }

    /// タブ切り替え
    ///
    /// カメラタブでは起動を、カメラ稼働中にアップロードタブへ移る場合は停止を要求する。
    /// 許可待ちの間は起動を重ねて要求しない。
    pub fn switch_mode(&mut self, mode: CaptureMode) -> Option<CameraCommand> {
        self.mode = mode;
        match mode {
            CaptureMode::Camera if !self.camera_active && !self.camera_starting => {
                Some(CameraCommand::Start)
            }
            CaptureMode::Upload if self.camera_active => Some(CameraCommand::Stop),
            _ => None,
        }
    }

    /// カメラタブのメインボタン押下時の操作
    pub fn camera_button_command(&self) -> Option<CameraCommand> {
        if self.processing || self.camera_active || self.camera_starting {
            None
        } else {
            Some(CameraCommand::Start)
        }
    }

    /// カメラ許可の要求を開始する。すでに稼働中・許可待ちなら拒否
    pub fn begin_camera_start(&mut self) -> bool {
        if self.camera_active || self.camera_starting {
            return false;
        }
        self.camera_starting = true;
        true
    }

    pub fn camera_granted(&mut self) {
        self.camera_starting = false;
        self.camera_active = true;
    }

    /// 許可待ちの間にカメラタブを離れた。取得したストリームは破棄する
    pub fn camera_start_cancelled(&mut self) {
        self.camera_starting = false;
    }

    /// カメラ取得失敗。カメラは非アクティブのまま
    pub fn camera_failed(&mut self) -> Notification {
        self.camera_starting = false;
        self.camera_active = false;
        Notification::camera_error()
    }

    pub fn camera_stopped(&mut self) {
        self.camera_active = false;
    }

    /// ファイル選択を受け付ける。処理中なら拒否
    pub fn begin_file_selection(&mut self) -> bool {
        if self.processing {
            return false;
        }
        self.processing = true;
        true
    }

    /// フレーム撮影を受け付ける。カメラ稼働中かつ処理中でない場合のみ
    pub fn begin_frame_capture(&mut self) -> bool {
        if self.processing || !self.camera_active {
            return false;
        }
        self.processing = true;
        true
    }

    /// 処理完了。カメラは停止しない
    pub fn finish_processing(&mut self, source: CaptureSource) -> Notification {
        self.processing = false;
        match source {
            CaptureSource::File => Notification::item_scanned(),
            CaptureSource::Camera => Notification::item_captured(),
        }
    }

    /// フレーム取得などに失敗した場合、処理前の状態へ戻す
    pub fn abort_processing(&mut self) {
        self.processing = false;
    }

    pub fn upload_button_label(&self) -> &'static str {
        if self.processing {
            "Processing..."
        } else {
            "Select Image"
        }
    }

    pub fn camera_button_label(&self) -> &'static str {
        if self.processing {
            "Processing..."
        } else if self.camera_active {
            "Take Photo"
        } else {
            "Start Camera"
        }
    }
}
