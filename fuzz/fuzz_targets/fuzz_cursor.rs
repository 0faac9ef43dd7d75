#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textmodem::{
    ParseError, ParserOptions, Position, StreamingParser, line, split_by_lengths,
};

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    /// Code-point lengths of the chunks; the remainder is one final chunk.
    splits: Vec<u8>,
    /// How many code points to advance by hand after each chunk.
    steps: Vec<u8>,
    line_feeds: bool,
}

/// Everything observable about a cursor walk: visited code points with their
/// positions, and the final position.
#[derive(Debug, PartialEq)]
struct Walk {
    visited: Vec<(char, Position)>,
    end: Position,
    index: usize,
}

fn options(line_feeds: bool) -> ParserOptions {
    ParserOptions {
        line_terminator: if line_feeds {
            line::is_line_terminator_or_line_feed
        } else {
            line::is_line_terminator
        },
        panic_on_error: true,
        ..Default::default()
    }
}

fn record(parser: &StreamingParser, walk: &mut Walk) {
    if let Some(c) = parser.cursor().current() {
        walk.visited.push((c, parser.cursor().position()));
    }
}

fn walk(chunks: &[&str], steps: &[u8], line_feeds: bool) -> Walk {
    let mut parser = StreamingParser::with_options(options(line_feeds));
    let mut walk = Walk {
        visited: Vec::new(),
        end: Position::default(),
        index: 0,
    };
    let mut steps = steps.iter().copied().chain(std::iter::repeat(1));

    for chunk in chunks {
        match parser.ingest_str(chunk) {
            Ok(()) => {
                if walk.visited.len() < parser.cursor().index() {
                    record(&parser, &mut walk);
                }
            }
            Err(ParseError::EndOfFile) => {}
            Err(err) => panic!("ingest failed: {err}"),
        }
        for _ in 0..steps.next().unwrap_or(1) % 8 {
            if parser.advance().is_err() {
                break;
            }
            record(&parser, &mut walk);
        }
        let cursor = parser.cursor();
        assert!(cursor.retained() <= cursor.ingested());
    }
    while parser.advance().is_ok() {
        record(&parser, &mut walk);
    }

    walk.end = parser.cursor().position();
    walk.index = parser.cursor().index();
    walk
}

fuzz_target!(|input: Input| {
    let whole = walk(&[input.text.as_str()], &[], input.line_feeds);
    assert_eq!(whole.index, input.text.chars().count());

    let chunks = split_by_lengths(&input.text, input.splits.iter().map(|&s| usize::from(s % 16)));
    let chunked = walk(&chunks, &input.steps, input.line_feeds);
    assert_eq!(whole, chunked);
});
