//! Species code remapping.
//!
//! Older export generations abbreviate species with 4-letter codes (first two
//! letters of genus and species); the modern export uses 6-letter codes
//! (three and three). A few legacy codes predate genus revisions, e.g.
//! `PISU` for what is now `PERSUB`.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

use bat_common::{replace_string_column, resolve_column, string_values};
use bat_model::fields::SPECIES_CODE_FIELDS;
use polars::prelude::DataFrame;

use crate::error::Result;

/// Trimmed length of a short (transitional) species code.
pub const SHORT_CODE_LEN: usize = 4;

/// Trimmed length of a canonical (modern) species code.
pub const LONG_CODE_LEN: usize = 6;

/// Short code to canonical code. Keys are uppercase.
static CODE_MAP: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        // Vespertilionidae: Myotis
        ("MYAU", "MYOAUS"),
        ("MYCA", "MYOCAL"),
        ("MYCI", "MYOCIL"),
        ("MYEV", "MYOEVO"),
        ("MYGR", "MYOGRI"),
        ("MYKE", "MYOKEE"),
        ("MYLE", "MYOLEI"),
        ("MYLU", "MYOLUC"),
        ("MYOC", "MYOOCC"),
        ("MYSE", "MYOSEP"),
        ("MYSO", "MYOSOD"),
        ("MYTH", "MYOTHY"),
        ("MYVE", "MYOVEL"),
        ("MYVO", "MYOVOL"),
        ("MYYU", "MYOYUM"),
        // Vespertilionidae: tree bats
        ("LABL", "LASBLO"),
        ("LABO", "LASBOR"),
        ("LACI", "LASCIN"),
        ("LAEG", "LASEGA"),
        ("LAIN", "LASINT"),
        ("LAMI", "LASMIN"),
        ("LASE", "LASSEM"),
        ("LAXA", "LASXAN"),
        ("LANO", "LASNOC"),
        // Vespertilionidae: other genera
        ("ANPA", "ANTPAL"),
        ("CORA", "CORRAF"),
        ("COTO", "CORTOW"),
        ("EPFU", "EPTFUS"),
        ("EUMA", "EUDMAC"),
        ("IDPH", "IDIPHY"),
        ("NYHU", "NYCHUM"),
        ("PAHE", "PARHES"),
        ("PESU", "PERSUB"),
        // Pre-revision genus names
        ("PISU", "PERSUB"),
        ("PIHE", "PARHES"),
        ("PLRA", "CORRAF"),
        ("PLTO", "CORTOW"),
        ("TAFE", "NYCFEM"),
        ("TAMA", "NYCMAC"),
        // Molossidae
        ("EUFL", "EUMFLO"),
        ("EUPE", "EUMPER"),
        ("EUUN", "EUMUND"),
        ("MOMO", "MOLMOL"),
        ("NYFE", "NYCFEM"),
        ("NYMA", "NYCMAC"),
        ("TABR", "TADBRA"),
        // Phyllostomidae
        ("ARJA", "ARTJAM"),
        ("CHME", "CHOMEX"),
        ("DIEC", "DIPECA"),
        ("LECU", "LEPCUR"),
        ("LEYE", "LEPYER"),
        ("LENI", "LEPNIV"),
        ("MACA", "MACCAL"),
        ("ERSE", "EROSEZ"),
        // Mormoopidae
        ("MOME", "MORMEG"),
        ("PTDA", "PTEDAV"),
        ("PTPA", "PTEPAR"),
        // Vespertilionidae: Old World imports in mixed deployments
        ("PIPI", "PIPPIP"),
        ("PIPY", "PIPPYG"),
        ("NYNO", "NYCNOC"),
        ("EPSE", "EPTSER"),
    ])
});

/// Looks up the canonical code for `value` (trimmed, case-insensitive).
///
/// # Examples
///
/// ```
/// use bat_standardize::codes::canonical_code;
///
/// assert_eq!(canonical_code("mylu"), Some("MYOLUC"));
/// assert_eq!(canonical_code(" LACI "), Some("LASCIN"));
/// assert_eq!(canonical_code("NoID"), None);
/// ```
pub fn canonical_code(value: &str) -> Option<&'static str> {
    CODE_MAP
        .get(value.trim().to_ascii_uppercase().as_str())
        .copied()
}

/// Remaps one value, falling back to the value itself when it has no entry.
pub fn remap_code(value: &str) -> Cow<'_, str> {
    match canonical_code(value) {
        Some(canonical) => Cow::Borrowed(canonical),
        None => Cow::Borrowed(value),
    }
}

/// All table entries sorted by short code.
pub fn code_map_entries() -> Vec<(&'static str, &'static str)> {
    let mut entries: Vec<_> = CODE_MAP.iter().map(|(k, v)| (*k, *v)).collect();
    entries.sort_unstable();
    entries
}

/// Remaps every species-code column present in the frame.
///
/// Columns are handled independently; an absent column is skipped. Nulls and
/// values without a table entry are left exactly as they were.
///
/// Returns the number of cells whose value changed.
pub fn remap_species_columns(df: &mut DataFrame) -> Result<usize> {
    let mut replaced = 0;
    for field in SPECIES_CODE_FIELDS {
        let Some(column) = resolve_column(df, field) else {
            continue;
        };
        let mut values = string_values(df, &column)?;
        let mut changed = 0;
        for value in values.iter_mut().flatten() {
            if let Some(canonical) = canonical_code(value)
                && canonical != value.as_str()
            {
                *value = canonical.to_string();
                changed += 1;
            }
        }
        if changed > 0 {
            replace_string_column(df, &column, values)?;
            replaced += changed;
        }
    }
    Ok(replaced)
}
