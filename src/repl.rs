use crate::export::QueryResult;
use crate::model::LanguageModel;
use crate::similarity::LanguageScore;
use log::debug;
use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "Please enter the text: ";
pub const QUIT_COMMAND: &str = ":quit";

/// Print `ranking` as `rank label score` lines, rank starting at 1.
pub fn print_ranking<W: Write>(out: &mut W, ranking: &[LanguageScore]) -> io::Result<()> {
    for (i, entry) in ranking.iter().enumerate() {
        writeln!(out, "{} {} {:?}", i + 1, entry.label, entry.score)?;
    }
    Ok(())
}

/// Prompt for lines on `input` until end of input or `:quit`, printing the
/// `top_k` matches for each. Returns the number of queries answered.
pub fn run<R: BufRead, W: Write>(
    model: &LanguageModel,
    top_k: usize,
    mut input: R,
    out: &mut W,
) -> io::Result<usize> {
    let mut answered = 0;
    let mut line = String::new();

    loop {
        write!(out, "\n{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim_end_matches(['\r', '\n']);
        if query.trim() == QUIT_COMMAND {
            break;
        }

        let ranking = model.top(query, top_k);
        print_ranking(out, &ranking)?;
        answered += 1;
    }

    debug!("Interactive session answered {} queries", answered);
    Ok(answered)
}

/// Rank every non-empty line of `queries`, printing the `top_k` matches of each.
pub fn run_batch<W: Write>(
    model: &LanguageModel,
    top_k: usize,
    queries: &str,
    out: &mut W,
) -> io::Result<Vec<QueryResult>> {
    let mut results = Vec::new();
    for query in queries.lines().filter(|l| !l.trim().is_empty()) {
        let ranking = model.top(query, top_k);
        writeln!(out, "{}", query)?;
        print_ranking(out, &ranking)?;
        results.push(QueryResult {
            query: query.to_string(),
            ranking,
        });
    }
    Ok(results)
}
