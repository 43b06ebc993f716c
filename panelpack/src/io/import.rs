use crate::entities::{Instance, Item};
use crate::io::ext_repr::ExtInstance;
use anyhow::{Result, ensure};

/// Imports an instance into the library.
/// Every demand row is validated and expanded into `count` individual items
/// with generated ids `"R1"`, `"R2"`, ... in row order.
pub fn import(ext_instance: &ExtInstance) -> Result<Instance> {
    ensure!(
        !ext_instance.demands.is_empty(),
        "instance contains no demand rows"
    );

    let bounds = ext_instance.bounds;
    ensure!(
        bounds.min_length > 0 && bounds.min_width > 0,
        "panel bounds must be positive: {bounds:?}"
    );
    ensure!(
        bounds.min_length <= bounds.max_length && bounds.min_width <= bounds.max_width,
        "panel bounds must be ordered: {bounds:?}"
    );

    let mut items = vec![];
    for (row, demand) in ext_instance.demands.iter().enumerate() {
        ensure!(
            demand.width > 0 && demand.height > 0,
            "demand row {row} has degenerate dimensions: {}x{}",
            demand.width,
            demand.height
        );
        ensure!(demand.count > 0, "demand row {row} has zero count");
        for _ in 0..demand.count {
            let id = format!("R{}", items.len() + 1);
            items.push(Item::new(id, demand.width, demand.height));
        }
    }

    Ok(Instance::new(items, bounds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::SearchBounds;
    use crate::io::ext_repr::ExtDemand;

    fn ext_instance(demands: Vec<ExtDemand>) -> ExtInstance {
        ExtInstance {
            name: "test".into(),
            demands,
            bounds: SearchBounds {
                min_length: 1000,
                max_length: 2000,
                min_width: 100,
                max_width: 500,
            },
        }
    }

    #[test]
    fn expands_counts_into_running_ids() {
        let ext = ext_instance(vec![
            ExtDemand {
                width: 100,
                height: 50,
                count: 2,
            },
            ExtDemand {
                width: 30,
                height: 40,
                count: 1,
            },
        ]);
        let instance = import(&ext).unwrap();
        assert_eq!(instance.total_item_qty(), 3);
        assert_eq!(
            instance.items.iter().map(|i| i.id.as_str()).collect::<Vec<_>>(),
            vec!["R1", "R2", "R3"]
        );
        assert_eq!(instance.items[2].width, 30);
    }

    #[test]
    fn parses_flattened_bounds() {
        let json = r#"{
            "name": "x",
            "demands": [{ "width": 100, "height": 50, "count": 2 }],
            "min_length": 200, "max_length": 200,
            "min_width": 50, "max_width": 50
        }"#;
        let ext: ExtInstance = serde_json::from_str(json).unwrap();
        assert_eq!(ext.bounds.min_length, 200);
        assert_eq!(import(&ext).unwrap().total_item_qty(), 2);
    }

    #[test]
    fn rejects_empty_demand_list() {
        assert!(import(&ext_instance(vec![])).is_err());
    }

    #[test]
    fn rejects_degenerate_demands() {
        let zero_width = ext_instance(vec![ExtDemand {
            width: 0,
            height: 50,
            count: 1,
        }]);
        assert!(import(&zero_width).is_err());

        let zero_count = ext_instance(vec![ExtDemand {
            width: 100,
            height: 50,
            count: 0,
        }]);
        assert!(import(&zero_count).is_err());
    }

    #[test]
    fn rejects_unordered_bounds() {
        let mut ext = ext_instance(vec![ExtDemand {
            width: 100,
            height: 50,
            count: 1,
        }]);
        ext.bounds.max_length = ext.bounds.min_length - 1;
        assert!(import(&ext).is_err());
    }
}
