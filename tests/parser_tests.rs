// Lexer filtering, run-length compression, and jump resolution.

use bfc::{parse, Instruction, Lexer, ParseErrorKind};

fn instructions(source: &[u8]) -> Vec<Instruction> {
    parse(Lexer::new(source))
        .expect("source should parse")
        .to_vec()
}

#[test]
fn lexer_yields_only_command_characters() {
    let symbols: Vec<u8> = Lexer::new(b"hello + world [ . ] 123").collect();
    assert_eq!(symbols, b"+[.]");
}

#[test]
fn comment_bytes_are_invisible_to_the_parser() {
    assert_eq!(instructions(b"a+b+"), instructions(b"++"));
    assert_eq!(instructions(b"a+b+"), vec![Instruction::Inc(2)]);
}

#[test]
fn empty_and_comment_only_sources_parse_to_nothing() {
    assert!(instructions(b"").is_empty());
    assert!(instructions(b"no commands here\n").is_empty());
}

#[test]
fn runs_compress_to_a_single_instruction() {
    assert_eq!(instructions(b"+++++"), vec![Instruction::Inc(5)]);
    assert_eq!(instructions(b"---"), vec![Instruction::Dec(3)]);
    assert_eq!(
        instructions(b">>><"),
        vec![Instruction::Right(3), Instruction::Left(1)]
    );
}

#[test]
fn symbol_interrupting_a_run_is_not_dropped() {
    // The lookahead that ends the `+` run must start the next
    // instruction, not vanish.
    assert_eq!(
        instructions(b"++.++"),
        vec![
            Instruction::Inc(2),
            Instruction::Output,
            Instruction::Inc(2),
        ]
    );
    assert_eq!(
        instructions(b"++>"),
        vec![Instruction::Inc(2), Instruction::Right(1)]
    );
}

#[test]
fn trivial_loop_resolves_to_partner_indices() {
    assert_eq!(
        instructions(b"[]"),
        vec![Instruction::JumpIfZero(1), Instruction::JumpIfNonZero(0)]
    );
}

#[test]
fn bracket_resolution_is_a_bijection() {
    for source in [
        &b"+[>+<-]"[..],
        &b"[[][]]"[..],
        &b"++[->+[->+<]<]"[..],
        &b"[.[,[+]-]<]"[..],
    ]
    .iter()
    {
        let stream = instructions(source);
        for (index, instruction) in stream.iter().enumerate() {
            match *instruction {
                Instruction::JumpIfZero(target) => {
                    assert_eq!(
                        stream[target],
                        Instruction::JumpIfNonZero(index),
                        "bad pairing in {:?}",
                        String::from_utf8_lossy(source)
                    );
                }
                Instruction::JumpIfNonZero(target) => {
                    assert_eq!(
                        stream[target],
                        Instruction::JumpIfZero(index),
                        "bad pairing in {:?}",
                        String::from_utf8_lossy(source)
                    );
                }
                _ => (),
            }
        }
    }
}

#[test]
fn unterminated_loop_is_rejected() {
    let err = parse(Lexer::new(b"[[")).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::UnterminatedLoop);

    let err = parse(Lexer::new(b"+[>+<-")).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::UnterminatedLoop);
}

#[test]
fn close_without_open_is_rejected() {
    let err = parse(Lexer::new(b"]")).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::CloseWithoutOpen);

    // The leading `]` fails even though a `[` follows.
    let err = parse(Lexer::new(b"][")).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::CloseWithoutOpen);
}

#[test]
fn parse_error_points_at_the_offending_bracket() {
    let err = parse(Lexer::new(b"++\n+]+")).unwrap_err();
    let rendered = err.to_string();

    assert!(rendered.contains("2:1"), "got: {}", rendered);
    assert!(rendered.ends_with("+]+\n ^"), "got: {}", rendered);
}
