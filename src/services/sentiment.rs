use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Deserialize;
use serde_json::json;

use crate::models::feedback_models::Sentiment;

/// One ranked prediction from a sentiment model.
#[derive(Debug, Clone, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f32,
}

/// Anything that can rank sentiment labels for a piece of text. Could be the
/// Hugging Face Inference API, a local model, or a test script.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<Vec<LabelScore>>;
}

pub struct HfSentimentClassifier {
    client: HttpClient,
    api_key: String,
    model: String,
}

impl HfSentimentClassifier {
    pub fn new() -> Self {
        let api_key = std::env::var("HF_API_KEY").unwrap();
        let model = std::env::var("HF_SENTIMENT_MODEL")
            .unwrap_or_else(|_| "distilbert-base-uncased-finetuned-sst-2-english".to_string());
        Self {
            client: HttpClient::new(),
            api_key,
            model,
        }
    }
}

#[async_trait]
impl SentimentClassifier for HfSentimentClassifier {
    async fn classify(&self, text: &str) -> Result<Vec<LabelScore>> {
        let url = format!(
            "https://api-inference.huggingface.co/models/{}",
            self.model
        );

        let body = json!({ "inputs": text });

        let res = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;
        let status = res.status();
        let text_body = res.text().await?;

        if !status.is_success() {
            anyhow::bail!("Hugging Face API error {}: {}", status, text_body);
        }

        let v: serde_json::Value = serde_json::from_str(&text_body)?;

        // Text-classification responses nest the ranking one level deep,
        // [[{label, score}, ...]], some models return it unnested.
        let ranked = match v.pointer("/0") {
            Some(first) if first.is_array() => first.clone(),
            _ => v,
        };

        Ok(serde_json::from_value(ranked)?)
    }
}

/// Classify `feedback`, folding any classifier failure into `Neutral`.
pub async fn analyze_sentiment(classifier: &dyn SentimentClassifier, feedback: &str) -> Sentiment {
    match classifier.classify(feedback).await {
        Ok(results) => normalize_label(&results),
        Err(err) => {
            tracing::error!("error analyzing sentiment: {:?}", err);
            Sentiment::Neutral
        }
    }
}

/// Collapse the top-ranked model label onto the closed label set.
pub fn normalize_label(results: &[LabelScore]) -> Sentiment {
    let Some(top) = results.first() else {
        return Sentiment::Neutral;
    };

    let label = top.label.to_lowercase();
    if label.contains("positive") {
        Sentiment::Positive
    } else if label.contains("negative") {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranked(labels: &[&str]) -> Vec<LabelScore> {
        labels
            .iter()
            .enumerate()
            .map(|(i, label)| LabelScore {
                label: label.to_string(),
                score: 1.0 - i as f32 * 0.1,
            })
            .collect()
    }

    #[test]
    fn uppercase_positive_label_normalizes() {
        assert_eq!(normalize_label(&ranked(&["POSITIVE"])), Sentiment::Positive);
    }

    #[test]
    fn mixed_case_negative_label_normalizes() {
        assert_eq!(normalize_label(&ranked(&["Negative"])), Sentiment::Negative);
    }

    #[test]
    fn substring_match_is_enough() {
        assert_eq!(
            normalize_label(&ranked(&["very_positive"])),
            Sentiment::Positive
        );
    }

    #[test]
    fn unknown_label_falls_back_to_neutral() {
        assert_eq!(normalize_label(&ranked(&["mixed"])), Sentiment::Neutral);
    }

    #[test]
    fn only_the_top_ranked_label_counts() {
        assert_eq!(
            normalize_label(&ranked(&["NEGATIVE", "POSITIVE"])),
            Sentiment::Negative
        );
    }

    #[test]
    fn empty_ranking_is_neutral() {
        assert_eq!(normalize_label(&[]), Sentiment::Neutral);
    }
}
