//! Plain-text rendering of core state.
//!
//! Every function writes to any [`Write`] so the CLI can reuse them for
//! batch output and tests can capture them in a `Vec<u8>`.

use registry_core::constants::{LOADING_TEXT, PATIENT_INFORMATION_HEADING};
use registry_core::{FieldErrors, FormField, PatientInformation, PatientRecord, RegistrationForm};
use std::io::{self, Write};

/// Writes the form with each field's value (or placeholder) and its error.
pub fn write_form(out: &mut impl Write, form: &RegistrationForm) -> io::Result<()> {
    for field in FormField::ALL {
        let value = form.value(field);
        if value.is_empty() {
            writeln!(out, "  {}: [{}]", field.label(), field.placeholder())?;
        } else {
            writeln!(out, "  {}: {}", field.label(), value)?;
        }
        if let Some(message) = form.error(field) {
            writeln!(out, "    ! {message}")?;
        }
    }
    Ok(())
}

/// Writes one line per validation message.
pub fn write_field_errors(out: &mut impl Write, errors: &FieldErrors) -> io::Result<()> {
    for (field, message) in errors.iter() {
        writeln!(out, "  {}: {}", field.key(), message)?;
    }
    Ok(())
}

/// Writes the Patient Information panel, or the loading text.
pub fn write_information(out: &mut impl Write, info: &PatientInformation) -> io::Result<()> {
    writeln!(out, "-- {PATIENT_INFORMATION_HEADING} --")?;
    if info.is_loading() {
        return writeln!(out, "{LOADING_TEXT}");
    }
    for (label, value) in info.lines() {
        writeln!(out, "{label}: {value}")?;
    }
    Ok(())
}

/// Writes the patient list, one record per line.
pub fn write_patient_list(out: &mut impl Write, records: &[PatientRecord]) -> io::Result<()> {
    if records.is_empty() {
        return writeln!(out, "No patients registered.");
    }
    for record in records {
        writeln!(
            out,
            "{} | {} | {} | {} | {} | {}",
            record.patient_id(),
            record.name(),
            record.age(),
            record.gender(),
            record.condition(),
            record.last_visit()
        )?;
    }
    Ok(())
}
