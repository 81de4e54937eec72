//! Indented line sink and argument quoting

use std::fmt::{self, Write};

use super::config::RenderConfig;

/// Line-oriented writer that tracks the current nesting depth
///
/// Every directive is written as one `\n`-terminated line prefixed by one
/// indent unit per open block.
pub(crate) struct DslWriter<'a> {
    out: &'a mut dyn Write,
    indent: String,
    depth: usize,
}

impl<'a> DslWriter<'a> {
    pub(crate) fn new(out: &'a mut dyn Write, config: &RenderConfig) -> Self {
        Self {
            out,
            indent: config.indent_unit(),
            depth: 0,
        }
    }

    /// Write one directive at the current depth
    pub(crate) fn line(&mut self, content: &str) -> fmt::Result {
        for _ in 0..self.depth {
            self.out.write_str(&self.indent)?;
        }
        self.out.write_str(content)?;
        self.out.write_char('\n')
    }

    /// Write `header {` and descend one level, a bare `{` for an empty header
    pub(crate) fn open(&mut self, header: &str) -> fmt::Result {
        if header.is_empty() {
            self.line("{")?;
        } else {
            self.line(&format!("{header} {{"))?;
        }
        self.depth += 1;
        Ok(())
    }

    /// Ascend one level and write the closing brace
    pub(crate) fn close(&mut self) -> fmt::Result {
        self.depth = self.depth.saturating_sub(1);
        self.line("}")
    }

    pub(crate) fn blank(&mut self) -> fmt::Result {
        self.out.write_char('\n')
    }

    #[cfg(test)]
    pub(crate) fn depth(&self) -> usize {
        self.depth
    }
}

/// Quote a string argument, escaping embedded double quotes
pub(crate) fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\\\""))
}

/// Append trailing optional quoted arguments
///
/// Arguments up to the last one that is set are emitted; unset arguments in
/// between become `""` so the consumer's positional grammar stays aligned.
pub(crate) fn push_positional(line: &mut String, args: &[Option<&str>]) {
    let Some(last) = args.iter().rposition(Option::is_some) else {
        return;
    };
    for arg in &args[..=last] {
        line.push(' ');
        line.push_str(&quote(arg.unwrap_or_default()));
    }
}

/// `<token> = <keyword> "<name>" [args...]`
pub(crate) fn element_header(
    token: &str,
    keyword: &str,
    name: &str,
    args: &[Option<&str>],
) -> String {
    let mut line = format!("{token} = {keyword} {}", quote(name));
    push_positional(&mut line, args);
    line
}
