//! LyX key-spec normalization
//!
//! Turns a raw key spec such as `M-m g a` into the canonical token
//! labels the engine matches against (`Alt+m g a`).

use lyxkeys_core::{KeySequence, KeyToken};

/// Normalizes a whitespace-separated key spec into a key sequence.
/// Returns `None` for a spec with no steps.
pub(crate) fn normalize_key_spec(spec: &str) -> Option<KeySequence> {
    let tokens: Vec<KeyToken> = spec
        .split_whitespace()
        .map(|step| KeyToken::from_label(normalize_step(step)))
        .collect();
    KeySequence::new(tokens).ok()
}

/// Normalizes one step of a key spec.
///
/// Deterministic, order-sensitive substitution: negated-modifier
/// prefixes (`~S-`, `~C-`, `~M-`) are stripped without emitting a
/// modifier, then `C-` maps to Ctrl, `M-`/`A-` to Alt and `S-` to
/// Shift, then the named-key alias table is applied to the remaining
/// key name. Stripping a negated modifier is a deliberate
/// simplification: the label cannot express "any state of this
/// modifier", so the binding only matches events with the modifier up.
fn normalize_step(step: &str) -> String {
    let mut rest = step;
    let mut ctrl = false;
    let mut alt = false;
    let mut shift = false;

    loop {
        if let Some(r) = rest
            .strip_prefix("~S-")
            .or_else(|| rest.strip_prefix("~C-"))
            .or_else(|| rest.strip_prefix("~M-"))
        {
            rest = r;
        } else if let Some(r) = rest.strip_prefix("C-") {
            ctrl = true;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("M-").or_else(|| rest.strip_prefix("A-")) {
            alt = true;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("S-") {
            shift = true;
            rest = r;
        } else {
            break;
        }
    }

    let mut label = String::new();
    if ctrl {
        label.push_str("Ctrl+");
    }
    if alt {
        label.push_str("Alt+");
    }
    if shift {
        label.push_str("Shift+");
    }
    label.push_str(key_alias(rest));
    label
}

/// Maps LyX key names to their canonical platform names. Names without
/// an alias (including `Tab`, `Escape`, `Delete`, `Home`, `End` and any
/// single character) pass through unchanged.
fn key_alias(name: &str) -> &str {
    match name {
        "space" => "Space",
        "Return" => "Enter",
        "BackSpace" => "Backspace",
        "Up" => "ArrowUp",
        "Down" => "ArrowDown",
        "Left" => "ArrowLeft",
        "Right" => "ArrowRight",
        "Prior" => "PageUp",
        "Next" => "PageDown",
        _ => name,
    }
}
