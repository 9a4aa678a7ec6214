// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use saturn_post::core::controller::Buttons;
use saturn_post::core::pattern::{AddressRange, PatternVerifier};
use saturn_post::core::platform::map::{VDP1_VRAM_BASE, VDP1_VRAM_LONGS, WORK_RAM_BASE};
use saturn_post::core::platform::Platform;
use saturn_post::core::sim::{InputScript, SimMemory, SimSaturn};
use std::hint::black_box;

fn vram_pattern_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("vram_pattern");

    for &words in &[0x1000u32, 0x1_0000, 0x2_0000] {
        group.throughput(Throughput::Elements(words as u64));
        group.bench_with_input(BenchmarkId::from_parameter(words), &words, |b, &words| {
            let mut vram = SimMemory::<u32>::new(VDP1_VRAM_BASE, VDP1_VRAM_LONGS);
            let verifier = PatternVerifier::new(AddressRange::new(0, words), 0xAAAA);
            b.iter(|| black_box(verifier.run(&mut vram).unwrap()));
        });
    }

    group.finish();
}

fn work_ram_pattern_benchmark(c: &mut Criterion) {
    c.bench_function("work_ram_pattern_4k", |b| {
        let mut ram = SimMemory::<u32>::new(WORK_RAM_BASE, 0x1000);
        let verifier = PatternVerifier::new(AddressRange::new(0, 0x1000), 0xAAAA_AAAA);
        b.iter(|| black_box(verifier.run(&mut ram).unwrap()));
    });
}

fn fail_fast_benchmark(c: &mut Criterion) {
    c.bench_function("vram_pattern_fault_at_0x1000", |b| {
        let mut vram = SimMemory::<u32>::new(VDP1_VRAM_BASE, VDP1_VRAM_LONGS);
        vram.stuck_at(0x1000, 0);
        let verifier = PatternVerifier::new(AddressRange::new(0, 0x2_0000), 0xAAAA);
        b.iter(|| black_box(verifier.run(&mut vram).is_err()));
    });
}

fn sim_frame_benchmark(c: &mut Criterion) {
    c.bench_function("sim_frame_idle", |b| {
        let mut saturn = SimSaturn::new();
        b.iter(|| {
            saturn.wait_frame();
            black_box(saturn.read_pad().held(Buttons::START));
        });
    });

    c.bench_function("sim_frame_scripted", |b| {
        let mut saturn = SimSaturn::new();
        b.iter(|| {
            saturn.queue_input(InputScript::taps(&[Buttons::DOWN], 0));
            saturn.wait_frame();
            black_box(saturn.read_pad());
        });
    });
}

criterion_group!(
    benches,
    vram_pattern_benchmark,
    work_ram_pattern_benchmark,
    fail_fast_benchmark,
    sim_frame_benchmark
);
criterion_main!(benches);
