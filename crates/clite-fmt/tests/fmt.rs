//! Integration tests for clite-fmt.

use clite_fmt::{FormatConfig, check, format, format_with_config};

// ============================================================================
// Basic Formatting
// ============================================================================

#[test]
fn test_format_simple() {
    let formatted = format("int main(){int x;x=1;}").unwrap();
    assert_eq!(formatted, "int main() {\n  int x;\n  x = 1;\n}\n");
}

#[test]
fn test_format_empty_program() {
    let formatted = format("int  main ( ) {  }").unwrap();
    assert_eq!(formatted, "int main() {\n}\n");
}

#[test]
fn test_declarations_one_per_line() {
    let formatted = format("int main() { int x, y; bool ok; }").unwrap();
    assert_eq!(
        formatted,
        "int main() {\n  int x;\n  int y;\n  bool ok;\n}\n"
    );
}

#[test]
fn test_custom_indent() {
    let config = FormatConfig::new().indent_width(4);
    let formatted = format_with_config("int main(){x=1;}", &config).unwrap();
    assert_eq!(formatted, "int main() {\n    x = 1;\n}\n");
}

#[test]
fn test_tabs() {
    let config = FormatConfig::new().use_tabs(true);
    let formatted = format_with_config("int main(){x=1;}", &config).unwrap();
    assert_eq!(formatted, "int main() {\n\tx = 1;\n}\n");
}

#[test]
fn test_parse_error_propagates() {
    assert!(format("int main() {").is_err());
}

// ============================================================================
// Statement Layout
// ============================================================================

#[test]
fn test_if_else_layout() {
    let formatted = format("int main(){if(x>0){y=1;}else y=2;}").unwrap();
    let expected = "\
int main() {
  if (x > 0) {
    y = 1;
  } else
    y = 2;
}
";
    assert_eq!(formatted, expected);
}

#[test]
fn test_else_if_chain_stays_flat() {
    let formatted = format("int main(){if(a)x=1;else if(b)x=2;else x=3;}").unwrap();
    let expected = "\
int main() {
  if (a)
    x = 1;
  else if (b)
    x = 2;
  else
    x = 3;
}
";
    assert_eq!(formatted, expected);
}

#[test]
fn test_while_unbraced_body_indents() {
    let formatted = format("int main(){while(n>0)n=n-1;}").unwrap();
    let expected = "\
int main() {
  while (n > 0)
    n = n - 1;
}
";
    assert_eq!(formatted, expected);
}

#[test]
fn test_nested_block_statement() {
    let formatted = format("int main(){{x=1;};}").unwrap();
    let expected = "\
int main() {
  {
    x = 1;
  }
  ;
}
";
    assert_eq!(formatted, expected);
}

// ============================================================================
// Expression Layout
// ============================================================================

#[test]
fn test_parens_preserved_when_needed() {
    let formatted = format("int main(){x=(2+3)*4;}").unwrap();
    assert!(formatted.contains("x = (2 + 3) * 4;"));
}

#[test]
fn test_redundant_parens_dropped() {
    let formatted = format("int main(){x=(2)+(3*4);}").unwrap();
    assert!(formatted.contains("x = 2 + 3 * 4;"));
}

#[test]
fn test_logical_and_unary_layout() {
    let formatted = format("int main(){ok=!(a&&b)||c;}").unwrap();
    assert!(formatted.contains("ok = !(a && b) || c;"));
}

#[test]
fn test_comparison_operands_at_different_levels_need_no_parens() {
    // relational inside equality reparses without parentheses
    let formatted = format("int main(){ok=(a<b)==(c<d);}").unwrap();
    assert!(formatted.contains("ok = a < b == c < d;"));
}

#[test]
fn test_cast_layout() {
    let formatted = format("int main(){x=int(f)+char(n);}").unwrap();
    assert!(formatted.contains("x = int(f) + char(n);"));
}

#[test]
fn test_float_keeps_its_fraction() {
    let formatted = format("int main(){f=1.0;g=2.5;}").unwrap();
    assert!(formatted.contains("f = 1.0;"));
    assert!(formatted.contains("g = 2.5;"));
}

#[test]
fn test_char_literal_escapes() {
    let formatted = format(r"int main(){c='\n';}").unwrap();
    assert!(formatted.contains(r"c = '\n';"));
}

// ============================================================================
// Idempotence and Check
// ============================================================================

#[test]
fn test_format_is_idempotent() {
    let source = r#"
        int main() {
            int n, sum;
            float f;
            n = 10; sum = 0; f = 0.5;
            while (n > 0) {
                if (n % 2 == 0) sum = sum + n; else { sum = sum - n; }
                n = n - 1;
            }
        }
    "#;
    let once = format(source).unwrap();
    let twice = format(&once).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_check_accepts_canonical_source() {
    let canonical = "int main() {\n  int x;\n  x = 1;\n}\n";
    assert!(check(canonical).unwrap());
}

#[test]
fn test_check_rejects_non_canonical_source() {
    assert!(!check("int main() { int x; x = 1; }").unwrap());
    // comma declarations are split by the canonical form
    assert!(!check("int main() {\n  int x, y;\n}\n").unwrap());
}
