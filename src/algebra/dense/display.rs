use crate::algebra::{DenseMatrix, FloatT, SettingsError, ShapedMatrix};
use derive_builder::Builder;
use std::fmt;

/// Formatting options for [`DenseMatrix::display_with`]
///
/// ```
/// use densemat::algebra::*;
///
/// let settings = DisplaySettingsBuilder::default()
///     .precision(2)
///     .max_rows(10)
///     .build()
///     .unwrap();
/// assert!(!settings.scientific);
/// ```

#[derive(Builder, Debug, Clone, PartialEq, Eq)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct DisplaySettings {
    ///digits printed after the decimal point
    #[builder(default = "4")]
    pub precision: usize,

    ///print entries in scientific notation
    #[builder(default = "false")]
    pub scientific: bool,

    ///maximum number of rows printed before eliding the rest
    #[builder(default = "None", setter(strip_option))]
    pub max_rows: Option<usize>,

    ///maximum number of columns printed before eliding the rest
    #[builder(default = "None", setter(strip_option))]
    pub max_cols: Option<usize>,
}

impl Default for DisplaySettings {
    fn default() -> DisplaySettings {
        DisplaySettings {
            precision: 4,
            scientific: false,
            max_rows: None,
            max_cols: None,
        }
    }
}

// f64 carries at most 17 significant decimal digits
const MAX_PRECISION: usize = 17;

impl From<SettingsError> for DisplaySettingsBuilderError {
    fn from(e: SettingsError) -> Self {
        DisplaySettingsBuilderError::ValidationError(e.to_string())
    }
}

/// Automatic pre-build settings validation
impl DisplaySettingsBuilder {
    /// check that the supplied fields are in range
    pub fn validate(&self) -> Result<(), SettingsError> {
        if let Some(precision) = self.precision {
            if precision > MAX_PRECISION {
                return Err(SettingsError::BadFieldValue("precision"));
            }
        }
        if let Some(Some(0)) = self.max_rows {
            return Err(SettingsError::BadFieldValue("max_rows"));
        }
        if let Some(Some(0)) = self.max_cols {
            return Err(SettingsError::BadFieldValue("max_cols"));
        }
        Ok(())
    }
}

/// [`Display`](std::fmt::Display) adaptor returned by
/// [`DenseMatrix::display_with`]
pub struct MatrixDisplay<'a, T> {
    mat: &'a DenseMatrix<T>,
    settings: &'a DisplaySettings,
}

impl<T> DenseMatrix<T>
where
    T: FloatT,
{
    /// Format the matrix according to `settings`
    pub fn display_with<'a>(&'a self, settings: &'a DisplaySettings) -> MatrixDisplay<'a, T> {
        MatrixDisplay {
            mat: self,
            settings,
        }
    }
}

impl<T> fmt::Display for MatrixDisplay<'_, T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (m, n) = self.mat.size();
        let settings = self.settings;
        let mrows = settings.max_rows.map_or(m, |k| k.min(m));
        let mcols = settings.max_cols.map_or(n, |k| k.min(n));

        for i in 0..mrows {
            let row = self.mat.row(i);
            write!(f, "[")?;
            for v in &row[..mcols] {
                if settings.scientific {
                    write!(f, " {:.*e}", settings.precision, v)?;
                } else {
                    write!(f, " {:.*}", settings.precision, v)?;
                }
            }
            if mcols < n {
                write!(f, " ...")?;
            }
            writeln!(f, " ]")?;
        }
        if mrows < m {
            writeln!(f, "[ ... ]")?;
        }
        Ok(())
    }
}

impl<T> fmt::Display for DenseMatrix<T>
where
    T: FloatT,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f)?;
        for i in 0..self.nrows() {
            write!(f, "[ ")?;
            for j in 0..self.ncols() {
                write!(f, " {:?}", self[(i, j)])?;
            }
            writeln!(f, "]")?;
        }
        writeln!(f)?;
        Ok(())
    }
}
