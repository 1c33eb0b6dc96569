use bind2json::{compile, compile_with_report};
use lyxkeys_core::{Action, BindingTable};
use pretty_assertions::assert_eq;

#[test]
fn test_frac_binding_scenario() {
    let table = compile(r#"\bind "M-m f" "math-insert \frac""#);

    let binding = table.get("Alt+m f").expect("binding registered");
    assert_eq!(binding.sequence.serialize(), "Alt+m f");
    assert_eq!(binding.sequence.len(), 2);
    assert_eq!(binding.action, Action::insert_with_caret("\\frac{}{}", 6));
    assert_eq!(binding.source_text, "M-m f");
    assert_eq!(binding.command_text, "math-insert \\frac");
}

#[test]
fn test_alpha_binding_scenario() {
    let table = compile(r#"\bind "M-m g a" "math-insert \alpha""#);

    let binding = table.get("Alt+m g a").expect("binding registered");
    assert_eq!(binding.sequence.len(), 3);
    assert_eq!(binding.action, Action::insert("α"));
}

#[test]
fn test_sequence_serialization_is_tidy() {
    // Token count equals the number of whitespace-separated spec
    // elements; no leading/trailing space in the serialization.
    let table = compile(r#"\bind "  C-x   C-f  " "buffer-open""#);

    let (key, binding) = table.iter().next().expect("one binding");
    assert_eq!(key, "Ctrl+x Ctrl+f");
    assert_eq!(binding.sequence.len(), 2);
    assert!(!key.starts_with(' ') && !key.ends_with(' '));
}

#[test]
fn test_comments_blanks_and_foreign_directives_ignored() {
    let text = r#"
# LyX math shortcuts

\bind_file math.bind
\unbind "M-m o"
Format 5
\bind "M-m p" "math-insert \pi"
"#;
    let output = compile_with_report(text);
    assert_eq!(output.table.len(), 1);
    assert!(output.skipped.is_empty());
    assert_eq!(
        output.table.get("Alt+m p").unwrap().action,
        Action::insert("π")
    );
}

#[test]
fn test_malformed_lines_skipped_with_line_numbers() {
    let text = "\\bind \"M-m a\" \"math-insert \\alpha\"\n\
                \\bind \"M-m b\"\n\
                \\bind \"\" \"math-insert \\beta\"\n\
                \\bind \"M-m g\" \"math-insert \\gamma\"";
    let output = compile_with_report(text);

    assert_eq!(output.table.len(), 2);
    assert!(output.table.get("Alt+m a").is_some());
    assert!(output.table.get("Alt+m g").is_some());

    let lines: Vec<usize> = output.skipped.iter().map(|s| s.line).collect();
    assert_eq!(lines, vec![2, 3]);
}

#[test]
fn test_duplicate_sequence_last_write_wins() {
    let text = "\\bind \"M-m p\" \"math-insert \\pi\"\n\
                \\bind \"M-m p\" \"math-insert \\Pi\"";
    let table = compile(text);

    assert_eq!(table.len(), 1);
    assert_eq!(table.get("Alt+m p").unwrap().action, Action::insert("Π"));
}

#[test]
fn test_negated_and_stacked_modifiers() {
    let table = compile(
        "\\bind \"~S-C-M-slash\" \"math-insert \\neq\"\n\
         \\bind \"C-S-space\" \"self-insert ~\"",
    );

    assert_eq!(
        table.get("Ctrl+Alt+slash").unwrap().action,
        Action::insert("≠")
    );
    assert_eq!(
        table.get("Ctrl+Shift+Space").unwrap().action,
        Action::insert("~")
    );
}

#[test]
fn test_named_key_aliases_in_sequences() {
    let table = compile(r#"\bind "M-m Return" "math-insert \sum""#);
    assert!(table.get("Alt+m Enter").is_some());

    let table = compile(r#"\bind "C-Prior" "buffer-begin""#);
    assert_eq!(
        table.get("Ctrl+PageUp").unwrap().action,
        Action::command("buffer-begin")
    );
}

#[test]
fn test_empty_input_compiles_to_empty_table() {
    assert!(compile("").is_empty());
    assert!(compile("\n\n# nothing here\n").is_empty());
}

#[test]
fn test_export_import_round_trip() {
    let table = compile(
        "\\bind \"M-m f\" \"math-insert \\frac\"\n\
         \\bind \"M-m g a\" \"math-insert \\alpha\"\n\
         \\bind \"M-m q\" \"self-insert x^2\"\n\
         \\bind \"C-q\" \"cancel\"",
    );

    let exported = table.export_json().unwrap();
    let reimported = BindingTable::import_json(&exported).unwrap();
    assert_eq!(table, reimported);

    // A second round trip through the re-imported table is stable too.
    assert_eq!(exported, reimported.export_json().unwrap());
}
