use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::config::QuerySettings;
use crate::error::{FovError, FovResult};
use crate::services::StarQuery;

pub const PROMPT_RA: &str = "Write Ra ";
pub const PROMPT_DEC: &str = "Write Dec ";
pub const PROMPT_COUNT: &str = "Write amount of stars ";
pub const PROMPT_FOV_HORIZONTAL: &str = "Write horizontal field of view ";
pub const PROMPT_FOV_VERTICAL: &str = "Write vertical field of view ";

/// Print `message`, read one line and parse it.
pub fn prompt_value<T, R, W>(input: &mut R, output: &mut W, message: &str) -> FovResult<T>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(FovError::invalid_input(format!(
            "no value given for '{}'",
            message.trim()
        )));
    }

    let trimmed = line.trim();
    trimmed.parse::<T>().map_err(|_| {
        FovError::invalid_input(format!("'{}' is not a valid answer to '{}'", trimmed, message.trim()))
    })
}

fn value_or_prompt<T, R, W>(
    value: Option<T>,
    input: &mut R,
    output: &mut W,
    message: &str,
) -> FovResult<T>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    match value {
        Some(v) => Ok(v),
        None => prompt_value(input, output, message),
    }
}

/// Fill the values missing from `settings` by asking, in the order
/// RA, Dec, star count, horizontal FOV, vertical FOV.
pub fn complete_query<R: BufRead, W: Write>(
    settings: &QuerySettings,
    input: &mut R,
    output: &mut W,
) -> FovResult<StarQuery> {
    let ra = value_or_prompt(settings.ra, input, output, PROMPT_RA)?;
    let dec = value_or_prompt(settings.dec, input, output, PROMPT_DEC)?;
    let count = value_or_prompt(settings.count, input, output, PROMPT_COUNT)?;
    let fov_h = value_or_prompt(settings.fov_horizontal, input, output, PROMPT_FOV_HORIZONTAL)?;
    let fov_v = value_or_prompt(settings.fov_vertical, input, output, PROMPT_FOV_VERTICAL)?;

    Ok(StarQuery::new(ra, dec, count, fov_h, fov_v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_complete_query_prompts_in_order() {
        let mut input = Cursor::new("10\n0\n2\n2.0\n2.0\n");
        let mut output = Vec::new();
        let query = complete_query(&QuerySettings::default(), &mut input, &mut output).unwrap();

        assert_eq!(query, StarQuery::new(10.0, 0.0, 2, 2.0, 2.0));
        let transcript = String::from_utf8(output).unwrap();
        assert_eq!(
            transcript,
            "Write Ra Write Dec Write amount of stars \
             Write horizontal field of view Write vertical field of view "
        );
    }

    #[test]
    fn test_complete_query_only_asks_missing_values() {
        let settings = QuerySettings {
            ra: Some(10.0),
            dec: Some(0.0),
            count: None,
            fov_horizontal: Some(1.0),
            fov_vertical: Some(1.0),
        };
        let mut input = Cursor::new("7\n");
        let mut output = Vec::new();
        let query = complete_query(&settings, &mut input, &mut output).unwrap();

        assert_eq!(query.count, 7);
        assert_eq!(String::from_utf8(output).unwrap(), PROMPT_COUNT);
    }

    #[test]
    fn test_prompt_rejects_garbage() {
        let mut input = Cursor::new("ten\n");
        let mut output = Vec::new();
        let err = prompt_value::<f64, _, _>(&mut input, &mut output, PROMPT_RA).unwrap_err();
        assert_eq!(err.kind(), "INVALID_INPUT");
    }

    #[test]
    fn test_prompt_rejects_fractional_count() {
        let mut input = Cursor::new("2.5\n");
        let mut output = Vec::new();
        assert!(prompt_value::<usize, _, _>(&mut input, &mut output, PROMPT_COUNT).is_err());
    }

    #[test]
    fn test_prompt_end_of_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        let err = prompt_value::<f64, _, _>(&mut input, &mut output, PROMPT_DEC).unwrap_err();
        assert!(err.to_string().contains("Write Dec"));
    }
}
