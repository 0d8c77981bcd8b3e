//! Query and label formatting for the results view.
use std::fmt::{Display, Write};

/// Builds `a<key>=<value>` pairs joined by `&`, in the iteration order of `answers`.
///
/// Values are interpolated as-is. Answers are booleans everywhere else, but any displayable value
/// is accepted here and callers rely on that.
pub fn format_query_params<K, V, I>(answers: I) -> String
where
    K: Display,
    V: Display,
    I: IntoIterator<Item = (K, V)>,
{
    answers
        .into_iter()
        .enumerate()
        .fold(String::new(), |mut params, (index, (key, value))| {
            if index > 0 {
                params.push('&');
            }
            let _ = write!(params, "a{key}={value}");
            params
        })
}

/// Appends a comma to every title except the last one of the list.
pub fn format_job_list(title: &str, list_length: usize, index: usize) -> String {
    if index + 1 == list_length {
        title.to_string()
    } else {
        format!("{title},")
    }
}
