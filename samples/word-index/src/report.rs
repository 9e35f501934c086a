//! Rendering a word index

use clap::ValueEnum;

use crate::index::WordIndex;

/// Output format of the report.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// The whole map on one line, as `{ (word, count) ... }`
    Map,
    /// One `word<TAB>count` line per word
    #[default]
    List,
    /// Shape of the underlying tree
    Stats,
}

/// Renders `index` in the requested format.
///
/// `top` limits the `list` format to the most frequent words; the other
/// formats ignore it. Every line, the last one included, ends in `\n`.
pub fn render(index: &WordIndex, format: Format, top: Option<usize>) -> String {
    let counts = index.counts();
    let lines: Vec<String> = match format {
        Format::Map => vec![counts.to_string()],
        Format::List => match top {
            Some(limit) => index
                .top(limit)
                .into_iter()
                .map(|(word, count)| format!("{word}\t{count}"))
                .collect(),
            None => counts
                .as_list()
                .into_iter()
                .map(|(word, count)| format!("{word}\t{count}"))
                .collect(),
        },
        Format::Stats => {
            let mut lines = vec![
                format!("sources\t{}", index.sources()),
                format!("words\t{}", counts.values().sum::<usize>()),
                format!("distinct\t{}", counts.size()),
                format!("depth\t{}", counts.max_depth()),
            ];
            if let (Some((first, _)), Some((last, _))) = (counts.min(), counts.max()) {
                lines.push(format!("first\t{first}"));
                lines.push(format!("last\t{last}"));
            }
            lines
        }
    };

    let mut output = String::new();
    for line in lines {
        output.push_str(&line);
        output.push('\n');
    }
    output
}
