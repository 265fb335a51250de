use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum KmlError {
    #[error("Invalid latitude: {0:.6} (expected a finite value in [-90, 90])")]
    InvalidLatitude(f64),

    #[error("Invalid longitude: {0:.6} (expected a finite value in [-180, 180])")]
    InvalidLongitude(f64),

    #[error("Placemark '{placemark}' references undeclared style '{style}'")]
    UndeclaredStyle { style: String, placemark: String },

    #[error("Invalid style id: '{0}'")]
    InvalidStyleId(String),

    #[error("Duplicate style id: '{0}'")]
    DuplicateStyle(String),
}

pub type Result<T> = std::result::Result<T, KmlError>;
