use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use libquote::QuoterOptions;
use libquote::Replayer;
use libquote::SyntaxLanguage;
use libquote::WhitespaceNormalizer;
use libquote::interchange;
use libquote_script::ScriptLanguage;
use libquote_script::parse_script;

const SAMPLE: &str = "/// Sums the values of a list.
pub fn sum(items, start) {
    let total = start; // running
    if (items == null) {
        return 0;
    } else total += first(items) * 2 - 0x10;
    log($\"total {total} of {count(items)}\");
    return total;
}

#region Data
let values = [1, 2.5, \"three\", true, null,];
#endregion
";

const DEFAULT_FORMATTING: QuoterOptions = QuoterOptions {
    use_default_formatting: true,
    remove_redundant_modifying_calls: true,
};

/// Builds a synthetic script by repeating the sample `copies` times.
fn synthetic_script(copies: usize) -> String {
    SAMPLE.repeat(copies)
}

const SIZES: [(&str, usize); 3] = [
    ("small", 1),
    ("medium", 20),
    ("large", 200),
];

// ─── Group 1: Parsing ────────────────────────────────────

fn script_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("script_parse");

    for (label, copies) in SIZES {
        let source = synthetic_script(copies);
        group.throughput(Throughput::Bytes(source.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(label),
            &source,
            |b, source| b.iter(|| black_box(parse_script(source))),
        );
    }

    group.finish();
}

// ─── Group 2: Quoting ────────────────────────────────────

fn quote(c: &mut Criterion) {
    let mut group = c.benchmark_group("quote");
    let language = ScriptLanguage;

    for (label, copies) in SIZES {
        let source = synthetic_script(copies);
        let tree = language.parse(&source);
        group.throughput(Throughput::Bytes(source.len() as u64));

        group.bench_with_input(
            BenchmarkId::new("preserve_trivia", label),
            &tree,
            |b, tree| {
                b.iter(|| {
                    let quoter =
                        libquote::Quoter::new(language.kind_registry())
                            .with_options(QuoterOptions::default());
                    black_box(quoter.quote_node(tree))
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("default_formatting", label),
            &tree,
            |b, tree| {
                b.iter(|| {
                    let quoter =
                        libquote::Quoter::new(language.kind_registry())
                            .with_options(DEFAULT_FORMATTING)
                            .with_normalizer(&language);
                    black_box(quoter.quote_node(tree))
                })
            },
        );
    }

    group.finish();
}

// ─── Group 3: Interchange ────────────────────────────────

fn interchange_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("interchange");
    let source = synthetic_script(20);
    let api_call = libquote::quote_source(
        &ScriptLanguage,
        &source,
        QuoterOptions::default(),
    )
    .expect("sample quotes");
    let text = interchange::encode(&api_call, false)
        .expect("sample encodes");
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("encode", |b| {
        b.iter(|| black_box(interchange::encode(&api_call, false)))
    });

    group.bench_function("encode (pretty)", |b| {
        b.iter(|| black_box(interchange::encode(&api_call, true)))
    });

    group.bench_function("decode", |b| {
        b.iter(|| black_box(interchange::decode(&text)))
    });

    group.finish();
}

// ─── Group 4: Replay ─────────────────────────────────────

fn replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("replay");
    let language = ScriptLanguage;
    let source = synthetic_script(20);
    group.throughput(Throughput::Bytes(source.len() as u64));

    let preserved = libquote::quote_source(
        &language,
        &source,
        QuoterOptions::default(),
    )
    .expect("sample quotes");
    group.bench_function("preserve_trivia", |b| {
        b.iter(|| {
            let replayer = Replayer::new(language.kind_registry());
            black_box(replayer.replay_node(&preserved))
        })
    });

    let formatted = libquote::quote_source(
        &language,
        &source,
        DEFAULT_FORMATTING,
    )
    .expect("sample quotes");
    group.bench_function("default_formatting + normalize", |b| {
        b.iter(|| {
            let replayer = Replayer::new(language.kind_registry());
            let node = replayer
                .replay_node(&formatted)
                .expect("sample replays");
            black_box(language.normalize_whitespace(&node))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    script_parse,
    quote,
    interchange_codec,
    replay,
);
criterion_main!(benches);
