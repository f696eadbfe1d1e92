use std::time::Instant;

use crate::model::Snippet;
use crate::search::filter;

fn p95_ms(samples: &mut [f64]) -> f64 {
    samples.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let last = samples.len().saturating_sub(1);
    let idx = ((last as f64) * 0.95).round() as usize;
    samples[idx.min(last)]
}

#[test]
fn warm_filter_p95_under_50ms() {
    let mut snippets: Vec<Snippet> = (0..2_000)
        .map(|i| Snippet {
            id: i.to_string(),
            command: format!("ssh deploy@host-{i:04}.internal"),
            keywords: vec!["ssh".to_string(), format!("host{i}")],
            description: format!("Connect to build host {i}"),
        })
        .collect();

    snippets.push(Snippet::new(
        "k8s",
        "kubectl get pods -A",
        &["kubernetes", "pods"],
        "List every pod",
    ));

    for _ in 0..10 {
        let _ = filter(&snippets, "kube pods");
    }

    let mut batch_p95 = Vec::with_capacity(5);
    for _ in 0..5 {
        let mut samples = Vec::with_capacity(40);
        for _ in 0..40 {
            let start = Instant::now();
            let result = filter(&snippets, "kube pods");
            samples.push(start.elapsed().as_secs_f64() * 1000.0);
            assert_eq!(result.len(), 1);
        }
        batch_p95.push(p95_ms(&mut samples));
    }

    batch_p95.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median_p95 = batch_p95[batch_p95.len() / 2];

    assert!(
        median_p95 <= 50.0,
        "median batch p95 too high: {median_p95:.3}ms (budget 50.0ms); batches={batch_p95:?}",
    );
}
