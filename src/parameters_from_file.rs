//! Supports extracting geometric parameters from YAML file (optional)

use std::path::Path;
use yaml_rust2::{Yaml, YamlLoader};

use crate::parameter_error::ParameterError;
use crate::parameters::scara_kinematics::Parameters;

impl Parameters {
    /// Read the arm geometry from a YAML file. YAML file like this is
    /// supported:
    /// ```yaml
    /// # Benchtop SCARA
    /// scara_kinematics_geometric_parameters:
    ///   a1: 0.30
    ///   a2: 0.25
    ///   a4: 0.18
    ///   base_height: 0.25
    ///   d3_min: -0.25
    ///   d3_max: 0.25
    ///   reach_margin: 0.0001
    /// ```
    /// `reach_margin` is optional and defaults to 0.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ParameterError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Read the arm geometry from a YAML string (see [Parameters::from_yaml_file]).
    pub fn from_yaml(contents: &str) -> Result<Self, ParameterError> {
        let docs = YamlLoader::load_from_str(contents)
            .map_err(|e| ParameterError::ParseError(format!("{}", e)))?;
        let doc = docs
            .first()
            .ok_or_else(|| ParameterError::ParseError("empty YAML document".to_string()))?;
        let geometry = &doc["scara_kinematics_geometric_parameters"];
        if geometry.is_badvalue() {
            return Err(ParameterError::MissingField(
                "scara_kinematics_geometric_parameters".to_string(),
            ));
        }

        let parameters = Parameters {
            a1: read_field(geometry, "a1")?,
            a2: read_field(geometry, "a2")?,
            a4: read_field(geometry, "a4")?,
            base_height: read_field(geometry, "base_height")?,
            d3_min: read_field(geometry, "d3_min")?,
            d3_max: read_field(geometry, "d3_max")?,
            reach_margin: read_optional(geometry, "reach_margin")?.unwrap_or(0.0),
        };

        if parameters.d3_min > parameters.d3_max {
            return Err(ParameterError::ParseError(format!(
                "d3_min {} exceeds d3_max {}",
                parameters.d3_min, parameters.d3_max
            )));
        }
        Ok(parameters)
    }
}

fn read_optional(node: &Yaml, field: &str) -> Result<Option<f64>, ParameterError> {
    let value = &node[field];
    if value.is_badvalue() {
        return Ok(None);
    }
    let number = value
        .as_f64()
        .or_else(|| value.as_i64().map(|v| v as f64))
        .ok_or_else(|| {
            ParameterError::ParseError(format!("field '{}' is not a number", field))
        })?;
    if !number.is_finite() {
        return Err(ParameterError::ParseError(format!(
            "field '{}' must be finite (got {})",
            field, number
        )));
    }
    Ok(Some(number))
}

fn read_field(node: &Yaml, field: &str) -> Result<f64, ParameterError> {
    read_optional(node, field)?.ok_or_else(|| ParameterError::MissingField(field.to_string()))
}
