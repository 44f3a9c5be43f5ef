use crate::{commands::FormArgs, env::parse_assignments, error::CliError};
use model::{error::ModelError, form::FormRecord};
use std::fs;
use tracing::debug;

/// Builds the form record from `--form-file` and `--field` arguments.
pub fn read_form(args: &FormArgs) -> Result<FormRecord, CliError> {
    let mut record: FormRecord = match &args.form_file {
        Some(path) => {
            debug!("Reading form fields from {}", path.display());
            let content = fs::read_to_string(path)?;
            parse_assignments(&content)
                .map_err(|e| ModelError::MalformedField(format!("{}: {e}", path.display())))?
                .into_iter()
                .collect()
        }
        None => FormRecord::new(),
    };

    record.merge(FormRecord::from_assignments(&args.fields)?);
    Ok(record)
}
