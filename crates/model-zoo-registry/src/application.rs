//! Application domain taxonomy.
//!
//! Every model record is tagged with the application it serves. The path
//! form (`cv/image_classification`) is the stable identifier used in
//! repository layouts and diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The application domain a model serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Application {
    /// Unspecified; matches any application when used in a query
    #[default]
    Undefined,
    /// Image classification
    ImageClassification,
    /// Object detection
    ObjectDetection,
    /// Semantic segmentation
    SemanticSegmentation,
    /// Instance segmentation
    InstanceSegmentation,
    /// Pose estimation
    PoseEstimation,
    /// Text classification
    TextClassification,
    /// Sentiment analysis
    SentimentAnalysis,
    /// Question answering
    QuestionAnswer,
    /// Text embedding
    TextEmbedding,
    /// Speech recognition
    SpeechRecognition,
}

impl Application {
    /// Stable path form, grouped by modality.
    pub fn as_path(self) -> &'static str {
        match self {
            Application::Undefined => "undefined",
            Application::ImageClassification => "cv/image_classification",
            Application::ObjectDetection => "cv/object_detection",
            Application::SemanticSegmentation => "cv/semantic_segmentation",
            Application::InstanceSegmentation => "cv/instance_segmentation",
            Application::PoseEstimation => "cv/pose_estimation",
            Application::TextClassification => "nlp/text_classification",
            Application::SentimentAnalysis => "nlp/sentiment_analysis",
            Application::QuestionAnswer => "nlp/question_answer",
            Application::TextEmbedding => "nlp/text_embedding",
            Application::SpeechRecognition => "audio/speech_recognition",
        }
    }

    /// Filter semantics: an [`Application::Undefined`] query matches every
    /// record; a concrete query matches only the same application.
    pub fn matches(self, query: Application) -> bool {
        query == Application::Undefined || self == query
    }
}

impl fmt::Display for Application {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}
