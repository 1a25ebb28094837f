use super::Block;
use crate::value::Value;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value as JsonValue;

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = JsonValue::deserialize(deserializer)?;

        Block::try_from(value).map_err(D::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = JsonValue::deserialize(deserializer)?;

        Value::try_from(value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use crate::structure::Body;
    use crate::value::{Value, Variable};
    use pretty_assertions::assert_eq;

    #[test]
    fn deserialize_body_from_json() {
        let body: Body = serde_json::from_str(
            r#"[
                {
                    "block": ["terraform"],
                    "attributes": { "required_version": ">= 1.5" }
                },
                {
                    "block": ["resource", "aws_instance", "web"],
                    "attributes": { "ami": { "$var": "ami" } }
                }
            ]"#,
        )
        .unwrap();

        assert_eq!(body.len(), 2);
        assert_eq!(body[0].ident(), Some("terraform"));
        assert_eq!(
            body[1].get_attribute("ami"),
            Some(&Value::Variable(Variable::new("ami")))
        );
    }

    #[test]
    fn deserialize_body_from_yaml() {
        let body: Body = serde_yaml::from_str(
            r#"
- block: [module, vpc]
  attributes:
    source: ./modules/vpc
    azs:
      $func: data.aws_availability_zones.available.names
"#,
        )
        .unwrap();

        assert_eq!(body.len(), 1);
        assert_eq!(body[0].ident(), Some("module"));
        assert_eq!(body[0].labels(), &["vpc"]);
        assert!(body[0].get_attribute("azs").is_some());
    }
}
