//! LyX command-spec to action translation

use lyxkeys_core::Action;

/// Translates a raw command spec into the action it should produce.
/// Prefix-driven dispatch, first match wins; anything unrecognized
/// degrades to an opaque command, never an error.
pub(crate) fn translate(command: &str) -> Action {
    let command = command.trim();

    if let Some(rest) = command.strip_prefix("math-insert ") {
        let latex = rest.trim();
        return match math_symbol(latex) {
            Some((text, caret)) => match caret {
                Some(offset) => Action::insert_with_caret(text, offset),
                None => Action::insert(text),
            },
            // Unknown math command: the LaTeX source itself is the
            // insertion text.
            None => Action::insert(latex),
        };
    }

    if let Some(rest) = command.strip_prefix("self-insert ") {
        return Action::insert(rest);
    }

    // Inner/outer quote variants all collapse to a plain double quote.
    if command.starts_with("quote-insert") {
        return Action::insert("\"");
    }

    if command.starts_with("specialchar-insert") {
        return Action::insert(special_char(command));
    }

    // Any other insert-like command: drop the command word, insert the
    // remainder.
    if command.contains("insert") {
        let text = command
            .split_once(char::is_whitespace)
            .map(|(_, rest)| rest)
            .unwrap_or("");
        return Action::insert(text);
    }

    Action::command(command)
}

/// Looks up a LaTeX math command. Returns the replacement text and an
/// optional caret offset for placeholder templates.
fn math_symbol(latex: &str) -> Option<(&'static str, Option<usize>)> {
    // Templates with an empty-group placeholder: the caret lands inside
    // the first group.
    match latex {
        "\\frac" => return Some(("\\frac{}{}", Some(6))),
        "\\sqrt" => return Some(("\\sqrt{}", Some(6))),
        _ => {}
    }

    let symbol = match latex {
        // Greek lowercase
        "\\alpha" => "α",
        "\\beta" => "β",
        "\\gamma" => "γ",
        "\\delta" => "δ",
        "\\epsilon" => "ε",
        "\\zeta" => "ζ",
        "\\eta" => "η",
        "\\theta" => "θ",
        "\\iota" => "ι",
        "\\kappa" => "κ",
        "\\lambda" => "λ",
        "\\mu" => "μ",
        "\\nu" => "ν",
        "\\xi" => "ξ",
        "\\pi" => "π",
        "\\rho" => "ρ",
        "\\sigma" => "σ",
        "\\tau" => "τ",
        "\\upsilon" => "υ",
        "\\phi" => "φ",
        "\\chi" => "χ",
        "\\psi" => "ψ",
        "\\omega" => "ω",

        // Greek uppercase
        "\\Gamma" => "Γ",
        "\\Delta" => "Δ",
        "\\Theta" => "Θ",
        "\\Lambda" => "Λ",
        "\\Xi" => "Ξ",
        "\\Pi" => "Π",
        "\\Sigma" => "Σ",
        "\\Upsilon" => "Υ",
        "\\Phi" => "Φ",
        "\\Psi" => "Ψ",
        "\\Omega" => "Ω",

        // Operators and relations
        "\\sum" => "∑",
        "\\prod" => "∏",
        "\\int" => "∫",
        "\\infty" => "∞",
        "\\pm" => "±",
        "\\neq" => "≠",
        "\\leq" => "≤",
        "\\geq" => "≥",
        "\\approx" => "≈",
        "\\times" => "×",
        "\\cdot" => "⋅",
        "\\partial" => "∂",
        "\\nabla" => "∇",
        "\\in" => "∈",
        "\\forall" => "∀",
        "\\exists" => "∃",
        "\\emptyset" => "∅",
        "\\cup" => "∪",
        "\\cap" => "∩",
        "\\subset" => "⊂",
        "\\supset" => "⊃",
        "\\rightarrow" => "→",
        "\\leftarrow" => "←",
        "\\Rightarrow" => "⇒",

        _ => return None,
    };
    Some((symbol, None))
}

/// Fixed characters for `specialchar-insert` variants. An unrecognized
/// variant inserts nothing.
fn special_char(command: &str) -> &'static str {
    if command.contains("hyphenation") {
        "\u{00AD}" // soft hyphen
    } else if command.contains("nobreakdash") {
        "\u{2011}" // non-breaking hyphen
    } else if command.contains("ligature-break") {
        "\u{200C}" // zero-width non-joiner
    } else if command.contains("end-of-sentence") {
        "."
    } else if command.contains("dots") {
        "…"
    } else {
        ""
    }
}
