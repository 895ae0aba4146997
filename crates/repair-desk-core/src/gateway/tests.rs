//! Gateway Tests
//!
//! Query rendering and the in-memory gateway's storage semantics.

#[cfg(test)]
mod tests {
    use crate::error::GatewayError;
    use crate::gateway::{Call, Filter, Gateway, MemoryGateway, Operation, Order, Select};
    use serde_json::{json, Value};

    fn pairs(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn titles(rows: &[Value]) -> Vec<&str> {
        rows.iter().filter_map(|row| row["title"].as_str()).collect()
    }

    #[test]
    fn test_select_query_pairs() {
        let query = Select::new("workers")
            .eq("city", "경기")
            .eq("district", "수원")
            .order(Order::asc("sort_order"));
        assert_eq!(
            query.query_pairs(),
            pairs(&[
                ("select", "*"),
                ("city", "eq.경기"),
                ("district", "eq.수원"),
                ("order", "sort_order.asc"),
            ])
        );

        let probe = Select::new("workers").limit(1);
        assert_eq!(probe.query_pairs(), pairs(&[("select", "*"), ("limit", "1")]));

        let newest = Select::new("todos").order(Order::desc("created_at"));
        assert_eq!(newest.query_pairs()[1], ("order".to_string(), "created_at.desc".to_string()));
    }

    #[tokio::test]
    async fn test_insert_assigns_ids_and_timestamps() {
        let gateway = MemoryGateway::new();
        gateway
            .insert("todos", json!([{ "title": "first", "completed": false }]))
            .await
            .unwrap();
        gateway
            .insert("todos", json!({ "title": "second", "completed": false }))
            .await
            .unwrap();

        let rows = gateway.rows("todos");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["id"], json!(1));
        assert_eq!(rows[1]["id"], json!(2));
        let first = rows[0]["created_at"].as_str().unwrap();
        let second = rows[1]["created_at"].as_str().unwrap();
        assert!(first < second);
    }

    #[tokio::test]
    async fn test_seeded_ids_are_respected() {
        let gateway = MemoryGateway::new();
        gateway
            .seed("todos", vec![json!({ "id": 10, "title": "old", "completed": true })])
            .unwrap();
        gateway.insert("todos", json!({ "title": "new", "completed": false })).await.unwrap();

        let ids: Vec<i64> = gateway
            .rows("todos")
            .iter()
            .filter_map(|row| row["id"].as_i64())
            .collect();
        assert_eq!(ids, vec![10, 11]);
        // seeding is out-of-band
        assert_eq!(gateway.count(Operation::Insert), 1);
    }

    #[tokio::test]
    async fn test_select_orders_filters_and_limits() {
        let gateway = MemoryGateway::new();
        gateway
            .seed(
                "todos",
                vec![
                    json!({ "title": "a", "completed": false }),
                    json!({ "title": "b", "completed": true }),
                    json!({ "title": "c", "completed": false }),
                ],
            )
            .unwrap();

        let newest = gateway
            .select(&Select::new("todos").order(Order::desc("created_at")))
            .await
            .unwrap();
        assert_eq!(titles(&newest), vec!["c", "b", "a"]);

        let by_id = gateway
            .select(&Select::new("todos").order(Order::asc("id")))
            .await
            .unwrap();
        assert_eq!(titles(&by_id), vec!["a", "b", "c"]);

        let open = gateway
            .select(&Select::new("todos").eq("completed", false))
            .await
            .unwrap();
        assert_eq!(titles(&open), vec!["a", "c"]);

        let first = gateway.select(&Select::new("todos").limit(1)).await.unwrap();
        assert_eq!(first.len(), 1);

        let unknown = gateway.select(&Select::new("missing")).await.unwrap();
        assert!(unknown.is_empty());
    }

    #[tokio::test]
    async fn test_null_placement_follows_postgres() {
        let gateway = MemoryGateway::new();
        gateway
            .seed(
                "workers",
                vec![
                    json!({ "id": "x", "name": "none", "sort_order": null }),
                    json!({ "id": "y", "name": "two", "sort_order": 2 }),
                    json!({ "id": "z", "name": "one", "sort_order": 1 }),
                ],
            )
            .unwrap();

        let names = |rows: Vec<Value>| -> Vec<String> {
            rows.iter().map(|row| row["name"].as_str().unwrap_or_default().to_string()).collect()
        };

        let asc = gateway
            .select(&Select::new("workers").order(Order::asc("sort_order")))
            .await
            .unwrap();
        assert_eq!(names(asc), vec!["one", "two", "none"]);

        let desc = gateway
            .select(&Select::new("workers").order(Order::desc("sort_order")))
            .await
            .unwrap();
        assert_eq!(names(desc), vec!["none", "two", "one"]);
    }

    #[tokio::test]
    async fn test_update_and_delete_by_key() {
        let gateway = MemoryGateway::new();
        gateway
            .seed(
                "todos",
                vec![
                    json!({ "title": "keep", "completed": false }),
                    json!({ "title": "change", "completed": false }),
                ],
            )
            .unwrap();

        gateway
            .update("todos", &[Filter::eq("id", 2)], json!({ "completed": true }))
            .await
            .unwrap();
        let rows = gateway.rows("todos");
        assert_eq!(rows[0]["completed"], json!(false));
        assert_eq!(rows[1]["completed"], json!(true));
        assert_eq!(rows[1]["title"], json!("change"));

        gateway.delete("todos", &[Filter::eq("id", 1)]).await.unwrap();
        assert_eq!(titles(&gateway.rows("todos")), vec!["change"]);

        // no match is not an error
        gateway.delete("todos", &[Filter::eq("id", 99)]).await.unwrap();
        assert_eq!(gateway.rows("todos").len(), 1);
    }

    #[tokio::test]
    async fn test_unkeyed_mutations_are_rejected() {
        let gateway = MemoryGateway::new();
        gateway.seed("todos", vec![json!({ "title": "safe", "completed": false })]).unwrap();

        let update = gateway.update("todos", &[], json!({ "completed": true })).await;
        assert!(matches!(update, Err(GatewayError::InvalidRequest(_))));
        let delete = gateway.delete("todos", &[]).await;
        assert!(matches!(delete, Err(GatewayError::InvalidRequest(_))));
        assert_eq!(gateway.rows("todos").len(), 1);

        let scalar = gateway.insert("todos", json!("oops")).await;
        assert!(matches!(scalar, Err(GatewayError::InvalidRequest(_))));
    }

    #[tokio::test]
    async fn test_injected_failures_and_journal() {
        let gateway = MemoryGateway::new();
        gateway.fail_next(
            Operation::Select,
            GatewayError::Transport("offline".to_string()),
        );

        let failed = gateway.select(&Select::new("todos")).await;
        assert_eq!(failed, Err(GatewayError::Transport("offline".to_string())));
        // only the next call fails
        assert!(gateway.select(&Select::new("todos")).await.is_ok());

        assert_eq!(
            gateway.calls(),
            vec![
                Call { operation: Operation::Select, table: "todos".to_string() },
                Call { operation: Operation::Select, table: "todos".to_string() },
            ]
        );
    }

    #[tokio::test]
    async fn test_batch_insert_with_malformed_row_writes_nothing() {
        let gateway = MemoryGateway::new();
        let batch = json!([
            { "title": "first", "completed": false },
            "not a row",
            { "title": "third", "completed": false },
        ]);

        let result = gateway.insert("todos", batch).await;
        assert!(matches!(result, Err(GatewayError::InvalidRequest(_))));
        assert!(gateway.rows("todos").is_empty());

        assert!(gateway.seed("todos", vec![json!({ "title": "ok" }), json!(7)]).is_err());
        assert!(gateway.rows("todos").is_empty());
    }
}
