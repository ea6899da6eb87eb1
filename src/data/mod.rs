//! Data module - site dictionary handling

mod dictionary;

pub use dictionary::{
    default_site_dictionary, site_dictionary_from_json, DictionaryError, SiteDictionary,
};
