/// Lazily groups lines into sections separated by delimiter lines.
///
/// Consecutive delimiters never produce an empty section, and the last group is
/// yielded even when the input does not end with a delimiter. Trailing
/// whitespace is stripped from every line; indentation is kept.
pub(crate) struct Sections<I, P> {
    lines: I,
    is_delimiter: P,
}

impl<I, P> Sections<I, P> {
    pub fn new(lines: I, is_delimiter: P) -> Self {
        Self {
            lines,
            is_delimiter,
        }
    }
}

impl<I, S, P> Iterator for Sections<I, P>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
    P: FnMut(&str) -> bool,
{
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut section = vec![];
        for line in self.lines.by_ref() {
            let line = line.as_ref();
            if (self.is_delimiter)(line) {
                if !section.is_empty() {
                    return Some(section);
                }
            } else {
                section.push(line.trim_end().to_string());
            }
        }

        if section.is_empty() {
            None
        } else {
            Some(section)
        }
    }
}

pub(crate) fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(text: &str) -> Vec<Vec<String>> {
        Sections::new(text.lines(), is_blank).collect()
    }

    #[test]
    fn blank_runs_collapse() {
        let sections = split("\n\na\nb\n\n  \n\t\nc\n\n");
        assert_eq!(sections, vec![vec!["a", "b"], vec!["c"]]);
    }

    #[test]
    fn last_section_without_trailing_delimiter() {
        let sections = split("a\n\nb\n\tc");
        assert_eq!(sections, vec![vec!["a"], vec!["b", "\tc"]]);
    }

    #[test]
    fn strips_only_trailing_whitespace() {
        let sections = split("\t* a: b  \r\n    memo\t\n");
        assert_eq!(sections, vec![vec!["\t* a: b", "    memo"]]);
    }

    #[test]
    fn empty_input_has_no_sections() {
        assert!(split("").is_empty());
        assert!(split("\n \n\n").is_empty());
    }

    #[test]
    fn custom_delimiter() {
        let lines = ["a", "# comment", "b", "c", "#", "d"];
        let sections: Vec<_> = Sections::new(lines.iter(), |l: &str| l.starts_with('#')).collect();
        assert_eq!(sections, vec![vec!["a"], vec!["b", "c"], vec!["d"]]);
    }
}
