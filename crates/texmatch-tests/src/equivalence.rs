//! Engine equivalence: sequential, scalar-tiled, and parallel backends
//! must agree on identical inputs.

use approx::assert_abs_diff_eq;

use texmatch_compute::{
    apply_transfer_with, compute_statistics_with, create_kernels, Backend, ScalarKernels,
};
use texmatch_core::TransferConfig;
use texmatch_stats::{apply_transfer, compute_statistics};

use crate::noise_buffer;

#[test]
fn statistics_agree_across_engines() {
    let buf = noise_buffer(64, 64, 0xdead_beef);

    let sequential = compute_statistics(&buf, 0.0, None).unwrap();
    let scalar = compute_statistics_with(&ScalarKernels::new(), &buf, 0.0, None).unwrap();

    assert_eq!(sequential.count, scalar.count);
    for c in 0..3 {
        assert_abs_diff_eq!(
            sequential.channel(c).mean,
            scalar.channel(c).mean,
            epsilon = 1e-3
        );
        assert_abs_diff_eq!(
            sequential.channel(c).stddev,
            scalar.channel(c).stddev,
            epsilon = 1e-3
        );
    }

    if Backend::Parallel.is_available() {
        let kernels = create_kernels(Backend::Parallel).unwrap();
        let parallel = compute_statistics_with(kernels.as_ref(), &buf, 0.0, None).unwrap();
        assert_eq!(sequential.count, parallel.count);
        for c in 0..3 {
            assert_abs_diff_eq!(
                sequential.channel(c).mean,
                parallel.channel(c).mean,
                epsilon = 1e-3
            );
            assert_abs_diff_eq!(
                sequential.channel(c).stddev,
                parallel.channel(c).stddev,
                epsilon = 1e-3
            );
        }
    }
}

#[test]
fn statistics_agree_on_non_tile_aligned_dimensions() {
    // 37x23 leaves ragged border tiles on both axes.
    let buf = noise_buffer(37, 23, 0xc0ffee);

    let sequential = compute_statistics(&buf, 0.0, None).unwrap();
    let scalar = compute_statistics_with(&ScalarKernels::new(), &buf, 0.0, None).unwrap();

    assert_eq!(sequential.count, 37 * 23);
    assert_eq!(sequential.count, scalar.count);
    for c in 0..3 {
        assert_abs_diff_eq!(
            sequential.channel(c).mean,
            scalar.channel(c).mean,
            epsilon = 1e-3
        );
        assert_abs_diff_eq!(
            sequential.channel(c).stddev,
            scalar.channel(c).stddev,
            epsilon = 1e-3
        );
    }
}

#[test]
fn transfer_agrees_across_engines() {
    let target = noise_buffer(48, 48, 0x1111);
    let reference = noise_buffer(48, 48, 0x2222);
    let config = TransferConfig::default().with_intensity(0.6);

    let t_stats = compute_statistics(&target, 0.0, None).unwrap();
    let r_stats = compute_statistics(&reference, 0.0, None).unwrap();

    let mut sequential_out = target.clone();
    apply_transfer(&mut sequential_out, &t_stats, &r_stats, &config).unwrap();

    let mut scalar_out = target.clone();
    apply_transfer_with(&ScalarKernels::new(), &mut scalar_out, &t_stats, &r_stats, &config)
        .unwrap();

    for (a, b) in sequential_out.data().iter().zip(scalar_out.data()) {
        assert_abs_diff_eq!(a, b, epsilon = 1e-6);
    }

    if Backend::Parallel.is_available() {
        let kernels = create_kernels(Backend::Parallel).unwrap();
        let mut parallel_out = target.clone();
        apply_transfer_with(kernels.as_ref(), &mut parallel_out, &t_stats, &r_stats, &config)
            .unwrap();
        for (a, b) in sequential_out.data().iter().zip(parallel_out.data()) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-6);
        }
    }
}

#[test]
fn alpha_and_mask_filtering_agree() {
    let mut buf = noise_buffer(32, 32, 0x3333);
    // Punch transparent holes.
    for y in (0..32).step_by(3) {
        for x in (0..32).step_by(5) {
            let mut px = buf.pixel(x, y);
            px[3] = 0.1;
            buf.set_pixel(x, y, px);
        }
    }
    let mut mask = texmatch_core::OccupancyMask::new(32, 32);
    for y in 0..32 {
        for x in 0..16 {
            mask.mark(x, y);
        }
    }

    let sequential = compute_statistics(&buf, 0.5, Some(&mask)).unwrap();
    let scalar =
        compute_statistics_with(&ScalarKernels::new(), &buf, 0.5, Some(&mask)).unwrap();

    assert_eq!(sequential.count, scalar.count);
    for c in 0..3 {
        assert_abs_diff_eq!(
            sequential.channel(c).mean,
            scalar.channel(c).mean,
            epsilon = 1e-3
        );
        assert_abs_diff_eq!(
            sequential.channel(c).stddev,
            scalar.channel(c).stddev,
            epsilon = 1e-3
        );
    }
}
