use crate::expression::{
    ExpressionError, Factor, Glyph, GlyphRenderer, LatexRenderer, Renderer, RowSink, StepRecord,
    SymbolNode, TextRenderer, convert_steps_to_equation, render, write_solution,
};
use crate::operation::{Operation, add, divide, multiply, subtract};

fn step(operation: &Operation<i64>, left: i64, right: i64) -> StepRecord<i64> {
    let record = StepRecord::literal(operation, left, right);
    assert!(
        record.is_ok(),
        "{} {} {} should be legal",
        left,
        operation.symbol(),
        right
    );
    match record {
        Ok(record) => record,
        Err(e) => panic!("{}", e),
    }
}

fn render_text(steps: &[StepRecord<i64>]) -> String {
    let root = convert_steps_to_equation(steps);
    assert!(root.is_ok(), "steps should form one expression");
    match root {
        Ok(root) => render(&TextRenderer, &root),
        Err(e) => panic!("{}", e),
    }
}

fn additive_chain_times_four() -> Vec<StepRecord<i64>> {
    vec![
        step(&add(), 5, 3),
        step(&subtract(), 8, 2),
        step(&multiply(), 6, 4),
    ]
}

#[test]
fn test_additive_chain_grouped_against_multiplication() {
    let text = render_text(&additive_chain_times_four());
    // The whole chain is one group; the commutative `*` puts the bare 4 first
    assert!(text.contains("(5 + 3 - 2)"));
    assert_eq!(text, "4 * (5 + 3 - 2)");
}

#[test]
fn test_non_associative_right_side_keeps_parens() {
    let steps = vec![step(&subtract(), 5, 3), step(&subtract(), 9, 2)];
    assert_eq!(render_text(&steps), "9 - (5 - 3)");

    let steps = vec![step(&multiply(), 6, 2), step(&divide(), 24, 12)];
    assert_eq!(render_text(&steps), "24 / (6 * 2)");
}

#[test]
fn test_left_chain_needs_no_parens() {
    let steps = vec![step(&subtract(), 9, 5), step(&subtract(), 4, 3)];
    assert_eq!(render_text(&steps), "9 - 5 - 3");

    let steps = vec![step(&divide(), 8, 4), step(&multiply(), 6, 2)];
    assert_eq!(render_text(&steps), "6 * 8 / 4");
}

#[test]
fn test_commutative_swap_moves_group_right() {
    let steps = vec![step(&add(), 2, 3), step(&multiply(), 5, 4)];
    assert_eq!(render_text(&steps), "4 * (2 + 3)");
}

#[test]
fn test_no_swap_for_non_commutative_operator() {
    // Both operands are 5; only the left one binds the earlier step
    let steps = vec![step(&add(), 2, 3), step(&divide(), 5, 5)];
    assert_eq!(render_text(&steps), "(2 + 3) / 5");
}

#[test]
fn test_no_swap_when_both_sides_grouped() {
    let steps = vec![
        step(&add(), 1, 2),
        step(&add(), 4, 5),
        step(&multiply(), 3, 9),
    ];
    assert_eq!(render_text(&steps), "(1 + 2) * (4 + 5)");
}

#[test]
fn test_equal_results_bind_first_left_and_last_right() {
    let steps = vec![
        step(&add(), 1, 2),
        step(&subtract(), 5, 2),
        step(&subtract(), 3, 3),
    ];
    let root = convert_steps_to_equation(&steps);
    assert!(root.is_ok());
    if let Ok(root) = root {
        assert_eq!(root.left().sub_expression().map(|s| s.operation().symbol()), Some("+"));
        assert_eq!(root.right().sub_expression().map(|s| s.operation().symbol()), Some("-"));
        assert_eq!(render(&TextRenderer, &root), "1 + 2 - (5 - 2)");
    }
}

#[test]
fn test_left_operand_binds_later_step() {
    let steps = vec![
        step(&add(), 3, 4),
        step(&subtract(), 10, 8),
        step(&multiply(), 2, 7),
    ];
    let root = convert_steps_to_equation(&steps);
    assert!(root.is_ok());
    if let Ok(root) = root {
        assert_eq!(root.left().sub_expression().map(|s| s.operation().symbol()), Some("-"));
        assert_eq!(root.right().sub_expression().map(|s| s.operation().symbol()), Some("+"));
        assert_eq!(root.literals(), vec![10, 8, 3, 4]);
        assert_eq!(root.evaluate(), Some(14));
        assert_eq!(render(&TextRenderer, &root), "(10 - 8) * (3 + 4)");
    }
}

#[test]
fn test_single_producer_is_not_bound_twice() {
    let steps = vec![step(&add(), 1, 2), step(&multiply(), 3, 3)];
    let root = convert_steps_to_equation(&steps);
    assert!(root.is_ok());
    if let Ok(root) = root {
        assert!(!root.left().is_literal());
        assert!(root.right().is_literal());
        assert_eq!(root.literals(), vec![1, 2, 3]);
    }
}

#[test]
fn test_tree_reevaluates_to_last_result() {
    let steps = additive_chain_times_four();
    let root = convert_steps_to_equation(&steps);
    assert!(root.is_ok());
    if let Ok(root) = root {
        assert_eq!(root.evaluate(), Some(24));
        assert_eq!(*root.result(), 24);
        assert_eq!(root.literals(), vec![5, 3, 2, 4]);
    }
}

#[test]
fn test_empty_and_disconnected_steps() {
    let empty: Vec<StepRecord<i64>> = Vec::new();
    assert_eq!(
        convert_steps_to_equation(&empty).err(),
        Some(ExpressionError::EmptySteps)
    );

    let steps = vec![step(&add(), 1, 2), step(&add(), 4, 5)];
    assert_eq!(
        convert_steps_to_equation(&steps).err(),
        Some(ExpressionError::DisconnectedSteps(2))
    );
}

#[test]
fn test_illegal_step_is_rejected() {
    let result = StepRecord::literal(&subtract(), 2, 5);
    assert!(matches!(
        result,
        Err(ExpressionError::UnresolvedOperation { .. })
    ));

    let result = StepRecord::literal(&divide(), 7, 2);
    assert!(result.is_err());
}

#[test]
fn test_operands_must_match_recorded_operation() {
    let result = StepRecord::new(add().record(5, 7, 12), Factor::Literal(4), Factor::Literal(8));
    assert_eq!(
        result.err(),
        Some(ExpressionError::OperandMismatch {
            recorded: String::from("5"),
            operand: String::from("4"),
        })
    );

    let inner = step(&add(), 3, 4);
    let result = StepRecord::new(add().record(2, 7, 9), Factor::Literal(2), Factor::from(inner));
    assert!(result.is_ok());

    let result = StepRecord::new(add().record(4, 7, 11), Factor::Literal(4), Factor::Literal(8));
    assert!(matches!(
        result,
        Err(ExpressionError::OperandMismatch { .. })
    ));
}

#[test]
fn test_factor_values() {
    let inner = step(&add(), 5, 3);
    let literal: Factor<i64> = Factor::Literal(4);
    let nested: Factor<i64> = Factor::from(inner);
    assert_eq!(*literal.value(), 4);
    assert_eq!(*nested.value(), 8);
    assert!(literal.is_literal());
    assert!(nested.sub_expression().is_some());
}

#[test]
fn test_latex_rendering() {
    let root = convert_steps_to_equation(&additive_chain_times_four());
    assert!(root.is_ok());
    if let Ok(root) = root {
        assert_eq!(
            render(&LatexRenderer, &root),
            "4 \\cdot \\left(5 + 3 - 2\\right)"
        );
    }

    let steps = vec![step(&multiply(), 6, 2), step(&divide(), 24, 12)];
    let root = convert_steps_to_equation(&steps);
    assert!(root.is_ok());
    if let Ok(root) = root {
        assert_eq!(
            render(&LatexRenderer, &root),
            "24 \\div \\left(6 \\cdot 2\\right)"
        );
    }
}

#[test]
fn test_latex_group_detection() {
    let renderer = LatexRenderer;
    let grouped = Renderer::<i64>::parenthesize(&renderer, String::from("1 + 2"));
    assert!(Renderer::<i64>::is_parenthesized(&renderer, &grouped));

    let two_groups = format!("{} \\cdot {}", grouped, grouped);
    assert!(!Renderer::<i64>::is_parenthesized(&renderer, &two_groups));
}

#[test]
fn test_glyph_rendering_matches_text_layout() {
    let root = convert_steps_to_equation(&additive_chain_times_four());
    assert!(root.is_ok());
    if let Ok(root) = root {
        let node = render(&GlyphRenderer, &root);
        assert_eq!(node.width(), 9);
        assert_eq!(node.glyphs().first(), Some(&&Glyph::Value(String::from("4"))));
        assert_eq!(node.to_string(), "[4][*][(][5][+][3][-][2][)]");

        let renderer = GlyphRenderer;
        let one = SymbolNode::Leaf(Glyph::Value("1".into()));
        let group = Renderer::<i64>::parenthesize(&renderer, one);
        assert!(Renderer::<i64>::is_parenthesized(&renderer, &group));
        assert!(!Renderer::<i64>::is_parenthesized(&renderer, &node));
    }
}

#[test]
fn test_text_transcript() {
    let mut out = String::new();
    let result = write_solution(&TextRenderer, &mut out, &additive_chain_times_four());
    assert!(result.is_ok());
    assert_eq!(
        out,
        "5 + 3 = 8\n8 - 2 = 6\n6 * 4 = 24\n\n4 * (5 + 3 - 2) = 24"
    );
}

#[test]
fn test_row_transcript() {
    let mut sink: RowSink<SymbolNode> = RowSink::new();
    let result = write_solution(&GlyphRenderer, &mut sink, &additive_chain_times_four());
    assert!(result.is_ok());

    let rows = sink.rows();
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().take(3).all(|row| row.len() == 1));
    assert!(rows.get(3).is_some_and(|row| row.is_empty()));
    assert_eq!(
        rows.get(4).and_then(|row| row.first()).map(|n| n.to_string()),
        Some(String::from("[4][*][(][5][+][3][-][2][)][=][24]"))
    );
}

#[test]
fn test_transcript_writes_nothing_on_error() {
    let mut out = String::new();
    let steps = vec![step(&add(), 1, 2), step(&add(), 4, 5)];
    assert!(write_solution(&TextRenderer, &mut out, &steps).is_err());
    assert!(out.is_empty());
}

#[test]
fn test_error_representation() {
    assert_eq!(Renderer::<i64>::error(&TextRenderer), "ERROR");
    assert_eq!(Renderer::<i64>::error(&GlyphRenderer), SymbolNode::Leaf(Glyph::Error));
}
