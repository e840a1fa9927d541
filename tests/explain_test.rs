// Facade and engine tests against closure models

use prism::core::{ScoreMatrix, Segments, TextBatch};
use prism::explain::{Method, NlpExplainer, TaskMode};

/// Two-class scoring model, additive over keyword presence
///
/// Column 1 is `bias + sum(weights of present keywords)`; column 0 is its
/// complement, so the rows behave like (unnormalized) probabilities.
fn keyword_model(
    weights: &[(&str, f32)],
    bias: f32,
) -> impl Fn(&[String]) -> anyhow::Result<ScoreMatrix> + Send + Sync {
    let weights: Vec<(String, f32)> = weights
        .iter()
        .map(|(word, weight)| (word.to_string(), *weight))
        .collect();

    move |texts: &[String]| {
        let mut data = Vec::with_capacity(texts.len() * 2);
        for text in texts {
            let mut score = bias;
            for (word, weight) in &weights {
                if text.split_whitespace().any(|token| token == word) {
                    score += weight;
                }
            }
            data.push(1.0 - score);
            data.push(score);
        }
        ScoreMatrix::from_flat(texts.len(), 2, data)
    }
}

#[test]
fn shap_matches_additive_weights() {
    let explainer = NlpExplainer::builder()
        .methods([Method::Shap])
        .predict(keyword_model(&[("great", 0.6)], 0.2))
        .samples(8)
        .seed(1)
        .build()
        .unwrap();

    let batch = TextBatch::from(vec!["great movie".to_string()]);
    let set = explainer.explain(&batch).unwrap();
    let explanation = &set.get("shap").unwrap()[0];

    assert_eq!(explanation.tokens, vec!["great", "movie"]);

    // Additive model: every marginal contribution equals the token weight
    assert!((explanation.scores[0] - 0.6).abs() < 1e-4);
    assert!(explanation.scores[1].abs() < 1e-4);

    // Attributions sum to f(x) - f(empty)
    let sum: f32 = explanation.scores.iter().sum();
    assert!((sum - (explanation.confidence - explanation.baseline)).abs() < 1e-4);
}

#[test]
fn lime_recovers_linear_coefficients() {
    let explainer = NlpExplainer::builder()
        .methods([Method::Lime])
        .predict(keyword_model(&[("great", 0.5), ("boring", -0.4)], 0.3))
        .target(1)
        .samples(256)
        .seed(7)
        .build()
        .unwrap();

    let batch = TextBatch::from(vec!["great but boring movie".to_string()]);
    let set = explainer.explain(&batch).unwrap();
    let explanation = &set.get("lime").unwrap()[0];

    let score_of = |token: &str| {
        explanation
            .tokens
            .iter()
            .position(|t| t == token)
            .map(|i| explanation.scores[i])
            .unwrap()
    };

    // The model is exactly linear in token presence, so the surrogate
    // should recover the coefficients up to the small ridge penalty
    assert!((score_of("great") - 0.5).abs() < 0.05);
    assert!((score_of("boring") + 0.4).abs() < 0.05);
    assert!(score_of("movie").abs() < 0.05);
    assert!(score_of("but").abs() < 0.05);
}

#[test]
fn occlusion_is_deterministic_and_sparse() {
    let build = || {
        NlpExplainer::builder()
            .methods([Method::Occlusion])
            .predict(keyword_model(&[("awful", 0.5)], 0.1))
            .target(1)
            .build()
            .unwrap()
    };

    let batch = TextBatch::from(vec!["an awful plot twist".to_string()]);
    let first = build().explain(&batch).unwrap();
    let second = build().explain(&batch).unwrap();

    let a = &first.get("occlusion").unwrap()[0];
    let b = &second.get("occlusion").unwrap()[0];
    assert_eq!(a.scores, b.scores);

    // Tokens the model ignores drop exactly nothing
    assert_eq!(a.tokens[0], "an");
    assert_eq!(a.scores[0], 0.0);
    assert!((a.scores[1] - 0.5).abs() < 1e-6);
}

#[test]
fn facade_dispatches_each_configured_method_once() {
    let explainer = NlpExplainer::builder()
        .methods([Method::Shap, Method::Lime, Method::Occlusion, Method::Shap])
        .predict(keyword_model(&[("fine", 0.2)], 0.4))
        .samples(4)
        .build()
        .unwrap();

    let batch = TextBatch::from(vec![
        "fine enough".to_string(),
        "not fine at all".to_string(),
    ]);
    let set = explainer.explain(&batch).unwrap();

    let methods: Vec<&str> = set.methods().collect();
    assert_eq!(methods, vec!["lime", "occlusion", "shap"]);

    // Batch order is preserved within every method
    for (_, explanations) in set.iter() {
        assert_eq!(explanations.len(), 2);
        assert_eq!(explanations[0].text, "fine enough");
        assert_eq!(explanations[1].text, "not fine at all");
    }
}

#[test]
fn empty_batch_yields_empty_set() {
    let explainer = NlpExplainer::builder()
        .methods([Method::Occlusion])
        .predict(keyword_model(&[], 0.5))
        .build()
        .unwrap();

    let set = explainer.explain(&TextBatch::new()).unwrap();
    assert!(set.is_empty());
}

#[test]
fn zero_token_instance_gets_empty_explanation() {
    let explainer = NlpExplainer::builder()
        .methods([Method::Shap])
        .predict(keyword_model(&[("good", 0.3)], 0.3))
        .samples(4)
        .build()
        .unwrap();

    let batch = TextBatch::from(vec!["".to_string(), "good".to_string()]);
    let set = explainer.explain(&batch).unwrap();
    let explanations = set.get("shap").unwrap();

    assert!(explanations[0].tokens.is_empty());
    assert!(explanations[0].scores.is_empty());
    assert_eq!(explanations[1].tokens, vec!["good"]);
}

#[test]
fn predictions_report_argmax_with_labels() {
    let explainer = NlpExplainer::builder()
        .mode(TaskMode::Classification)
        .methods([Method::Occlusion])
        .predict(keyword_model(&[("great", 0.6)], 0.2))
        .labels(["negative", "positive"])
        .build()
        .unwrap();

    let batch = TextBatch::from(vec![
        "great stuff".to_string(),
        "nothing here".to_string(),
    ]);
    let predictions = explainer.predictions(&batch).unwrap();

    assert_eq!(predictions[0].class, 1);
    assert_eq!(predictions[0].label, "positive");
    assert!((predictions[0].confidence - 0.8).abs() < 1e-6);

    assert_eq!(predictions[1].class, 0);
    assert_eq!(predictions[1].label, "negative");
}

#[test]
fn builder_rejects_missing_predict_and_empty_methods() {
    let no_predict = NlpExplainer::builder().methods([Method::Shap]).build();
    assert!(no_predict.is_err());

    let no_methods = NlpExplainer::builder()
        .predict(keyword_model(&[], 0.5))
        .build();
    assert!(no_methods.is_err());
}

#[test]
fn method_names_round_trip() {
    let methods = Method::parse_list("shap, lime,occlusion").unwrap();
    assert_eq!(methods, vec![Method::Shap, Method::Lime, Method::Occlusion]);

    assert!(Method::parse_list("shap,gradients").is_err());
}

#[test]
fn segments_mask_by_omission() {
    let segments = Segments::split("a  quick   test");
    assert_eq!(segments.len(), 3);

    assert_eq!(segments.mask(&[true, true, true]), "a quick test");
    assert_eq!(segments.mask(&[true, false, true]), "a test");
    assert_eq!(segments.mask(&[false, false, false]), "");

    assert!(Segments::split("   ").is_empty());
}

#[test]
fn softmax_rows_are_probabilities() {
    let scores = ScoreMatrix::from_flat(2, 3, vec![1.0, 2.0, 3.0, -1.0, 0.0, 1.0]).unwrap();
    let argmax_before = scores.argmax_rows();
    let probs = scores.softmax();

    for row in 0..probs.rows() {
        let sum: f32 = probs.row(row).iter().sum();
        assert!((sum - 1.0).abs() < 1e-5);
    }
    assert_eq!(probs.argmax_rows(), argmax_before);
}

#[test]
fn top_tokens_rank_by_magnitude() {
    let explainer = NlpExplainer::builder()
        .methods([Method::Occlusion])
        .predict(keyword_model(&[("love", 0.3), ("hate", -0.6)], 0.5))
        .target(1)
        .build()
        .unwrap();

    let batch = TextBatch::from(vec!["love hate neither".to_string()]);
    let set = explainer.explain(&batch).unwrap();
    let explanation = &set.get("occlusion").unwrap()[0];

    let top = explanation.top_tokens(2);
    assert_eq!(top[0].0, "hate");
    assert_eq!(top[1].0, "love");
}
