pub mod takeover_classifier;

pub use takeover_classifier::TakeoverClassifier;
