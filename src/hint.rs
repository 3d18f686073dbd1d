//! Natural-language mismatch hints for self-training prompts.

/// Renders a mismatch explanation by substituting `{truth}` and `{pred}` into
/// `template`.
///
/// An absent or empty `pred_final` renders as the literal `(empty)` so the hint
/// is always informative.
///
/// ```
/// use rubric::constants::DEFAULT_MISMATCH_HINT_TEMPLATE;
/// use rubric::hint::build_mismatch_hint;
///
/// let hint = build_mismatch_hint("42", Some("41"), DEFAULT_MISMATCH_HINT_TEMPLATE);
/// assert!(hint.contains("42") && hint.contains("41"));
/// ```
pub fn build_mismatch_hint(truth_final: &str, pred_final: Option<&str>, template: &str) -> String {
    let pred_display = match pred_final {
        Some(pred) if !pred.is_empty() => pred,
        _ => "(empty)",
    };
    template
        .replace("{truth}", truth_final)
        .replace("{pred}", pred_display)
}
