// GEDCOM XML - Streaming GEDCOM to XML converter
//
// Copyright (c) 2025 gedcom-xml contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! GEDCOM to XML throughput benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gedcom_xml::{transcode, TranscodeConfig};
use std::fmt::Write;

/// Generate a family tree file with `people` individuals.
fn generate_gedcom(people: usize) -> String {
    let mut out = String::from("0 HEAD\n1 SOUR bench\n2 VERS 1.0\n1 CHAR UTF-8\n");
    for i in 0..people {
        let _ = write!(
            out,
            "0 @I{i}@ INDI\n\
             1 NAME Person{i} /Family{f}/\n\
             2 GIVN Person{i}\n\
             2 SURN Family{f}\n\
             1 SEX {sex}\n\
             1 BIRT\n\
             2 DATE {day} JAN {year}\n\
             2 PLAC Town & Country <{f}>\n\
             1 FAMS @F{f}@\n",
            f = i / 4,
            sex = if i % 2 == 0 { "M" } else { "F" },
            day = i % 28 + 1,
            year = 1800 + i % 200,
        );
    }
    out.push_str("0 TRLR\n");
    out
}

fn bench_transcode(c: &mut Criterion) {
    let mut group = c.benchmark_group("transcode");
    let config = TranscodeConfig::default();

    for people in [100, 1_000, 10_000] {
        let input = generate_gedcom(people);
        group.throughput(Throughput::Bytes(input.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(people), &input, |b, input| {
            b.iter(|| {
                let mut output = Vec::with_capacity(input.len() * 2);
                let stats = transcode(black_box(input.as_bytes()), &mut output, &config).unwrap();
                black_box((stats, output));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_transcode);
criterion_main!(benches);
