use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::time::Duration;

pub const SCHEMA_VERSION: &str = "v1";

// ---------- Input (wire) types ----------

/// One candidate object. Fields other than the three known ones are kept so a
/// chosen item is written back in its original shape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Item {
    pub item_id: String,
    pub weight: Number,
    pub value: Number,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Item {
    pub fn new(item_id: impl Into<String>, weight: f64, value: f64) -> Self {
        Item {
            item_id: item_id.into(),
            weight: number(weight),
            value: number(value),
            extra: Map::new(),
        }
    }

    pub fn weight(&self) -> f64 {
        self.weight.as_f64().unwrap_or(0.0)
    }

    pub fn value(&self) -> f64 {
        self.value.as_f64().unwrap_or(0.0)
    }
}

/// Integral floats become JSON integers so `Item::new("a", 5.0, 10.0)` reads
/// like `{"weight": 5, "value": 10}`.
fn number(v: f64) -> Number {
    if v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        Number::from(v as i64)
    } else {
        Number::from_f64(v).unwrap_or_else(|| Number::from(0))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Problem {
    pub weight_capacity: f64,
    pub items: Vec<Item>,
}

// ---------- Output (wire) types ----------
// Field declaration order is the key order in the written JSON.

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Output {
    pub solutions: Vec<ChosenItems>,
    pub statistics: Statistics,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChosenItems {
    pub items: Vec<Item>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Statistics {
    pub result: ResultStatistics,
    pub run: RunStatistics,
    pub schema: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ResultStatistics {
    pub custom: CustomStatistics,
    pub duration: f64,
    pub value: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CustomStatistics {
    pub constraints: usize,
    pub provider: String,
    pub status: i32,
    pub variables: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RunStatistics {
    pub duration: f64,
}

/// What the adapter hands back: the chosen subset and the solve statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct KnapsackSolution {
    pub items: Vec<Item>,
    pub statistics: ResultStatistics,
}

impl Output {
    pub fn new(solution: KnapsackSolution, run_duration: Duration) -> Self {
        Output {
            solutions: vec![ChosenItems {
                items: solution.items,
            }],
            statistics: Statistics {
                result: solution.statistics,
                run: RunStatistics {
                    duration: run_duration.as_secs_f64(),
                },
                schema: SCHEMA_VERSION.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_keeps_original_shape() {
        let raw = json!({"item_id": "a", "weight": 5, "value": 10.5, "color": "red"});
        let item: Item = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(item.item_id, "a");
        assert_eq!(item.weight(), 5.0);
        assert_eq!(item.value(), 10.5);
        assert_eq!(item.extra.get("color"), Some(&json!("red")));
        assert_eq!(serde_json::to_value(&item).unwrap(), raw);
    }

    #[test]
    fn test_item_missing_weight_is_rejected() {
        let raw = json!({"item_id": "a", "value": 1});
        assert!(serde_json::from_value::<Item>(raw).is_err());
    }

    #[test]
    fn test_item_new_writes_integral_numbers_as_integers() {
        let item = Item::new("a", 5.0, 2.5);
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"item_id": "a", "weight": 5, "value": 2.5})
        );
    }

    #[test]
    fn test_output_key_order() {
        let solution = KnapsackSolution {
            items: vec![],
            statistics: ResultStatistics {
                custom: CustomStatistics {
                    constraints: 1,
                    provider: "microlp".to_string(),
                    status: 0,
                    variables: 0,
                },
                duration: 0.5,
                value: 0.0,
            },
        };
        let output = Output::new(solution, Duration::from_millis(750));
        let text = serde_json::to_string(&output).unwrap();

        let order = ["\"solutions\"", "\"statistics\"", "\"result\"", "\"custom\"",
            "\"constraints\"", "\"provider\"", "\"status\"", "\"variables\"",
            "\"duration\"", "\"value\"", "\"run\"", "\"schema\""];
        let positions: Vec<usize> = order.iter().map(|k| text.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{}", text);
        assert_eq!(output.statistics.run.duration, 0.75);
        assert_eq!(output.statistics.schema, "v1");
    }
}
