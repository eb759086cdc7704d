use lazy_sssp::config::{execute, OutputFormat, RunConfig};
use lazy_sssp::graph::{Graph, GraphDocument};
use lazy_sssp::report::Report;
use lazy_sssp::{Dijkstra, Error, ShortestPathAlgorithm};
use ordered_float::OrderedFloat;
use std::io::Write;
use std::path::PathBuf;

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("lazy_sssp_{}_{}.json", name, std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

#[test]
fn test_directed_document() {
    let doc = GraphDocument::from_json_str(
        r#"{ "adjacency": { "A": [["B", 1.0], ["C", 4.0]], "B": [["C", 2.0]] } }"#,
    )
    .unwrap();
    assert!(doc.directed);

    let graph = doc.to_graph();
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.has_edge(&"A".to_string(), &"B".to_string()));
    assert!(!graph.has_edge(&"B".to_string(), &"A".to_string()));
}

#[test]
fn test_undirected_document_inserts_both_ways() {
    let doc = GraphDocument::from_json_str(
        r#"{ "directed": false, "adjacency": { "A": [["B", 3.0]] } }"#,
    )
    .unwrap();
    let graph = doc.to_graph();

    assert_eq!(graph.edge_count(), 2);
    assert_eq!(
        graph.get_edge_weight(&"B".to_string(), &"A".to_string()),
        Some(OrderedFloat(3.0))
    );
}

#[test]
fn test_negative_weight_loads_but_fails_to_compute() {
    let doc = GraphDocument::from_json_str(r#"{ "adjacency": { "A": [["B", -1.0]] } }"#).unwrap();
    let graph = doc.to_graph();
    assert_eq!(
        graph.get_edge_weight(&"A".to_string(), &"B".to_string()),
        Some(OrderedFloat(-1.0))
    );

    let result = Dijkstra::new().compute_shortest_paths(&graph, &"A".to_string());
    assert!(matches!(result, Err(Error::InvalidWeight { .. })));
}

#[test]
fn test_malformed_documents() {
    let not_json = GraphDocument::from_json_str("{ adjacency: ");
    assert!(matches!(not_json, Err(Error::GraphFormat(_))));

    let empty_name = GraphDocument::from_json_str(r#"{ "adjacency": { "": [] } }"#);
    assert!(matches!(empty_name, Err(Error::GraphFormat(_))));

    let empty_target = GraphDocument::from_json_str(r#"{ "adjacency": { "A": [["", 1.0]] } }"#);
    assert!(matches!(empty_target, Err(Error::GraphFormat(_))));
}

#[test]
fn test_missing_file_is_io_error() {
    let result = GraphDocument::from_path("/definitely/not/here.json");
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_report_text_for_sample_graph() {
    let output = execute(&RunConfig::default()).unwrap();

    assert!(output.starts_with("Start vertex: A\n"));
    assert!(output.contains("  A -> B: 3\n"));
    assert!(output.contains("  A -> F: 13\n"));
    assert!(output.contains("  A -> F: A -> C -> B -> D -> E -> F (dist=13)\n"));
}

#[test]
fn test_report_marks_unreachable() {
    let path = write_temp(
        "unreachable",
        r#"{ "adjacency": { "A": [["B", 2.5]], "X": [] } }"#,
    );
    let config = RunConfig {
        graph_path: Some(path.clone()),
        ..Default::default()
    };
    let output = execute(&config).unwrap();
    std::fs::remove_file(path).unwrap();

    assert!(output.contains("  A -> B: 2.5\n"));
    assert!(output.contains("  A -> X: unreachable\n"));
    assert!(output.contains("  A -> B: A -> B (dist=2.5)\n"));
}

#[test]
fn test_report_json_for_selected_targets() {
    let config = RunConfig {
        targets: vec!["E".to_string(), "Z".to_string()],
        format: OutputFormat::Json,
        ..Default::default()
    };
    let output = execute(&config).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["source"], "A");
    let entries = value["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["vertex"], "E");
    assert_eq!(entries[0]["distance"], 10.0);
    assert_eq!(entries[0]["path"], serde_json::json!(["A", "C", "B", "D", "E"]));
    // Z is not in the graph at all
    assert_eq!(entries[1]["distance"], serde_json::Value::Null);
    assert_eq!(entries[1]["path"], serde_json::json!([]));
}

#[test]
fn test_report_sorted_by_vertex() {
    let graph = lazy_sssp::graph::sample_graph();
    let result = Dijkstra::new().compute_shortest_paths(&graph, &"D".to_string()).unwrap();
    let report = Report::from_result(&result);

    let order: Vec<&str> = report.entries.iter().map(|e| e.vertex.as_str()).collect();
    assert_eq!(order, vec!["A", "B", "C", "D", "E", "F"]);
    assert_eq!(report.reachable_count(), 6);
}

#[test]
fn test_report_display_and_writer() {
    let graph = lazy_sssp::graph::sample_graph();
    let result = Dijkstra::new().compute_shortest_paths(&graph, &"E".to_string()).unwrap();
    let report = Report::for_targets(&result, [&"A".to_string(), &"Q".to_string()]);

    let mut written = String::new();
    report.write_text(&mut written, false).unwrap();
    assert_eq!(
        written,
        "Start vertex: E\n\nShortest distances:\n  E -> A: 10\n  E -> Q: unreachable\n\n\
         Paths:\n  E -> A: E -> D -> B -> C -> A (dist=10)\n  E -> Q: unreachable\n"
    );
    assert_eq!(report.to_string(), written);
    assert_eq!(report.render(false), written);
}

#[test]
fn test_execute_reports_invalid_weight() {
    let path = write_temp("negative", r#"{ "adjacency": { "A": [["B", -3.0]] } }"#);
    let config = RunConfig {
        graph_path: Some(path.clone()),
        ..Default::default()
    };
    let result = execute(&config);
    std::fs::remove_file(path).unwrap();

    let err = result.unwrap_err();
    assert_eq!(err.to_string(), "Invalid edge weight -3 on edge \"A\" -> \"B\"");
}
