use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lispel::{Evaluator, Parser, Scanner};

fn pipeline_benchmark(c: &mut Criterion) {
    let arithmetic = "(+ 1 2 (* 3 4) (- 10 5) (/ 100 4))";
    c.bench_function("eval arithmetic", |b| {
        b.iter(|| {
            let mut scanner = Scanner::new(black_box(arithmetic));
            let tokens = scanner.scan_tokens().unwrap();
            let tree = Parser::new(tokens).parse().unwrap();
            let mut evaluator = Evaluator::new();
            evaluator.run(&tree)
        })
    });

    let lists = "(join (list 1 2 3) (tail {4 5 6}) (head {7 8 9}))";
    c.bench_function("eval list pipeline", |b| {
        b.iter(|| {
            let mut scanner = Scanner::new(black_box(lists));
            let tokens = scanner.scan_tokens().unwrap();
            let tree = Parser::new(tokens).parse().unwrap();
            let mut evaluator = Evaluator::new();
            evaluator.run(&tree)
        })
    });
}

criterion_group!(benches, pipeline_benchmark);
criterion_main!(benches);
