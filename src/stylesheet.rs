use crate::location::TextRange;

/// One `@import`-like statement found in stylesheet source.
///
/// Rules only read `params` and carry the offsets through into
/// diagnostics; the surrounding statement is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AtRule {
    /// Raw parameter text following the at-keyword, terminator excluded.
    pub params: String,
    /// Byte offset of `params` within the source.
    pub params_start: usize,
    /// Byte range of the whole statement, `@` included.
    pub range: TextRange,
}

/// Scans stylesheet source for at-rules with the given keyword and returns
/// one node per statement, in document order.
///
/// This is a traversal, not a parser: at-rules inside comments or quoted
/// strings are skipped, the parameter text runs until the terminating `;`,
/// `{` or end of input, and nothing inside the parameters is interpreted.
pub fn walk_at_rules(source: &str, name: &str) -> Vec<AtRule> {
    let bytes = source.as_bytes();
    let mut at_rules = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'*') => i = skip_block_comment(bytes, i),
            b'/' if bytes.get(i + 1) == Some(&b'/') => i = skip_line_comment(bytes, i),
            b'"' | b'\'' => i = skip_string(bytes, i),
            b'@' => {
                let kw_start = i + 1;
                let mut j = kw_start;
                while j < bytes.len() && is_ident_byte(bytes[j]) {
                    j += 1;
                }
                if &source[kw_start..j] != name {
                    i = j;
                    continue;
                }
                let (at_rule, next) = read_at_rule(source, i, j);
                at_rules.push(at_rule);
                i = next;
            }
            _ => i += 1,
        }
    }

    at_rules
}

fn is_ident_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_'
}

/// Reads the statement starting at the `@` sign, with the keyword already
/// consumed up to `after_keyword`. Returns the node and the offset at
/// which scanning resumes.
fn read_at_rule(source: &str, at: usize, after_keyword: usize) -> (AtRule, usize) {
    let bytes = source.as_bytes();

    let mut k = after_keyword;
    while k < bytes.len() && bytes[k].is_ascii_whitespace() {
        k += 1;
    }
    let params_start = k;

    // A `;` or `{` inside a quoted string or a comment does not end the
    // statement.
    let mut term = bytes.len();
    while k < bytes.len() {
        match bytes[k] {
            b';' | b'{' => {
                term = k;
                break;
            }
            b'"' | b'\'' => k = skip_string(bytes, k),
            b'/' if bytes.get(k + 1) == Some(&b'*') => k = skip_block_comment(bytes, k),
            _ => k += 1,
        }
    }

    let params = source[params_start..term].trim_end();
    let end = if term < bytes.len() && bytes[term] == b';' {
        term + 1
    } else {
        term
    };

    let at_rule = AtRule {
        params: params.to_string(),
        params_start,
        range: TextRange::new(at, end),
    };
    (at_rule, end)
}

fn skip_string(bytes: &[u8], start: usize) -> usize {
    let quote = bytes[start];
    let mut i = start + 1;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            byte if byte == quote => return i + 1,
            _ => i += 1,
        }
    }
    bytes.len()
}

fn skip_block_comment(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 2;
    while i + 1 < bytes.len() {
        if bytes[i] == b'*' && bytes[i + 1] == b'/' {
            return i + 2;
        }
        i += 1;
    }
    bytes.len()
}

fn skip_line_comment(bytes: &[u8], start: usize) -> usize {
    let mut i = start + 2;
    while i < bytes.len() && bytes[i] != b'\n' {
        i += 1;
    }
    i
}
