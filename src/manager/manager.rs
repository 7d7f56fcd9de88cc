use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use super::managererror::{
    ManagerError, 
    parse_json_value
};

/// Registry of named objects built from JSON definitions.
pub struct Manager<V> {
    map: HashMap<String, V>,
    get_obj_from_json: fn(serde_json::Value) -> Result<(String, V), ManagerError>
}

impl <V> Manager<V> where 
    V: Clone {
    pub fn new(get_obj_from_json: fn(serde_json::Value) -> Result<(String, V), ManagerError>) -> Manager<V> {
        Manager { 
            map: HashMap::new(), 
            get_obj_from_json 
        }
    }

    /// Registers `obj` under `name`, returning the object it replaced.
    pub fn insert(&mut self, name: impl Into<String>, obj: V) -> Option<V> {
        self.map.insert(name.into(), obj)
    }

    pub fn get(&self, name: &str) -> Result<V, ManagerError> {
        self.map
            .get(name)
            .cloned()
            .ok_or_else(|| ManagerError::NameNotFoundError(name.to_owned()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Registered names in alphabetical order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.map.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn insert_obj_from_json(&mut self, json_value: serde_json::Value) -> Result<String, ManagerError> {
        let (name, obj) = (self.get_obj_from_json)(json_value)?;
        if self.map.insert(name.clone(), obj).is_some() {
            debug!(name = name.as_str(), "replaced existing definition");
        }
        Ok(name)
    }

    /// Loads every definition or none: on the first error the registry is
    /// left as it was.
    pub fn insert_obj_from_json_vec(&mut self, json_vec: &[serde_json::Value]) -> Result<Vec<String>, ManagerError> {
        let mut parsed = Vec::with_capacity(json_vec.len());
        for j in json_vec.iter() {
            parsed.push((self.get_obj_from_json)(j.clone())?);
        }
        let mut names = Vec::with_capacity(parsed.len());
        for (name, obj) in parsed {
            self.map.insert(name.clone(), obj);
            names.push(name);
        }
        Ok(names)
    }

    /// Reads a file holding either one definition or an array of them.
    pub fn from_reader(&mut self, file_path: impl AsRef<Path>) -> Result<Vec<String>, ManagerError> {
        let file = File::open(file_path)?;
        let reader = BufReader::new(file);
        let json_value: serde_json::Value = serde_json::from_reader(reader)?;
        if json_value.is_array() {
            let json_array: Vec<serde_json::Value> = parse_json_value(json_value)?;
            self.insert_obj_from_json_vec(&json_array)
        } else {
            Ok(vec![self.insert_obj_from_json(json_value)?])
        }
    }
}
