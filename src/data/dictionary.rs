//! Site Dictionary Module
//! Named anatomical sites and their pixel coordinates on the reference
//! body image.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictionaryError {
    #[error("failed to read site dictionary: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse site dictionary: {0}")]
    Json(#[from] serde_json::Error),
}

/// Mapping from anatomical site name to `[x, y]` pixel coordinates on a
/// specific reference image. Coordinates measured against one image are
/// meaningless against another.
pub type SiteDictionary = HashMap<String, [i32; 2]>;

/// Built-in coordinates for the standard portrait body image (2000x4000 px).
pub fn default_site_dictionary() -> SiteDictionary {
    HashMap::from([
        ("Brain".to_string(), [1000, 400]),
        ("Breast".to_string(), [780, 2250]),
        ("Lung".to_string(), [1260, 2000]),
        ("Liver".to_string(), [1000, 2700]),
        ("Uterus".to_string(), [1000, 3350]),
        ("Cervix".to_string(), [1000, 3600]),
    ])
}

/// Load a replacement dictionary from a JSON object of
/// `{"Site": [x, y], ...}` entries.
pub fn site_dictionary_from_json(path: &Path) -> Result<SiteDictionary, DictionaryError> {
    let file = File::open(path)?;
    let dictionary = serde_json::from_reader(BufReader::new(file))?;
    Ok(dictionary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_dictionary_covers_the_six_reference_sites() {
        let dict = default_site_dictionary();
        assert_eq!(dict.len(), 6);
        assert_eq!(dict.get("Liver"), Some(&[1000, 2700]));
        for site in ["Brain", "Breast", "Lung", "Cervix", "Uterus"] {
            assert!(dict.contains_key(site), "missing {}", site);
        }
    }

    #[test]
    fn dictionary_round_trips_through_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sites.json");
        let dict = default_site_dictionary();
        serde_json::to_writer(File::create(&path).unwrap(), &dict).unwrap();

        let loaded = site_dictionary_from_json(&path).unwrap();
        assert_eq!(loaded, dict);
    }

    #[test]
    fn missing_dictionary_file_is_an_io_error() {
        let err = site_dictionary_from_json(Path::new("no-such-sites.json")).unwrap_err();
        assert!(matches!(err, DictionaryError::Io(_)));
    }
}
