//! End-to-end recoloring scenarios through the host accessor seams.

use approx::assert_abs_diff_eq;

use texmatch_compute::TransferProcessor;
use texmatch_core::{
    MaterialSlot, MemoryRenderer, MemoryTexture, PixelAccessor, PixelBuffer, TextureKey,
    TransferConfig,
};
use texmatch_core::MaterialAccessor;
use texmatch_uv::{build_occupancy_mask_for, find_material_slot_using_texture, RasterMode};

use crate::{quad_mesh, split_buffer};

#[test]
fn red_target_adopts_blue_reference() {
    let proc = TransferProcessor::auto();
    let mut target = PixelBuffer::filled(16, 16, [1.0, 0.0, 0.0, 1.0]);
    let reference = PixelBuffer::filled(16, 16, [0.0, 0.0, 1.0, 1.0]);

    proc.recolor(&mut target, &reference, None, &TransferConfig::default())
        .unwrap();

    for (_, _, px) in target.pixels() {
        assert_abs_diff_eq!(px[0], 0.0, epsilon = 2e-2);
        assert_abs_diff_eq!(px[1], 0.0, epsilon = 2e-2);
        assert_abs_diff_eq!(px[2], 1.0, epsilon = 2e-2);
        assert_eq!(px[3], 1.0);
    }
}

#[test]
fn half_intensity_lands_between_source_and_reference() {
    let proc = TransferProcessor::auto();
    let mut target = PixelBuffer::filled(8, 8, [1.0, 0.0, 0.0, 1.0]);
    let reference = PixelBuffer::filled(8, 8, [0.0, 0.0, 1.0, 1.0]);

    let config = TransferConfig::default().with_intensity(0.5);
    proc.recolor(&mut target, &reference, None, &config).unwrap();

    let px = target.pixel(0, 0);
    // Neither pure red nor pure blue.
    assert!(px[0] > 0.1 && px[0] < 0.9, "red channel was {}", px[0]);
    assert!(px[2] > 0.1 && px[2] < 0.9, "blue channel was {}", px[2]);
}

#[test]
fn occupancy_mask_restricts_reference_statistics() {
    // Reference: left half blue, right half green. The mesh only maps the
    // left half, so the occupancy mask must hide the green from statistics.
    let reference = split_buffer(8, 8, [0.0, 0.0, 1.0, 1.0], [0.0, 1.0, 0.0, 1.0]);
    let mesh = quad_mesh(0.0, 0.0, 0.5, 0.75);
    let mask = build_occupancy_mask_for(&mesh, 0, 0, 8, 8, RasterMode::Filled).unwrap();

    let proc = TransferProcessor::auto();
    let config = TransferConfig::default();

    let mut masked = PixelBuffer::filled(8, 8, [1.0, 0.0, 0.0, 1.0]);
    proc.recolor(&mut masked, &reference, Some(&mask), &config)
        .unwrap();
    let masked_px = masked.pixel(0, 0);
    assert!(masked_px[2] > 0.9, "expected blue, got {masked_px:?}");
    assert!(masked_px[1] < 0.05, "green leaked in: {masked_px:?}");

    // Control: without the mask the green half contaminates the mean.
    let mut unmasked = PixelBuffer::filled(8, 8, [1.0, 0.0, 0.0, 1.0]);
    proc.recolor(&mut unmasked, &reference, None, &config).unwrap();
    assert!(
        unmasked.pixel(0, 0)[1] > 0.2,
        "control should shift toward green: {:?}",
        unmasked.pixel(0, 0)
    );
}

#[test]
fn host_flow_resolves_rasterizes_and_writes_back() {
    let reference_buf = split_buffer(8, 8, [0.0, 0.0, 1.0, 1.0], [0.0, 1.0, 0.0, 1.0]);
    let reference_tex = MemoryTexture::new(42, "bark_albedo", reference_buf);

    let renderer = MemoryRenderer::new(vec![
        MaterialSlot::unbound("trunk"),
        MaterialSlot::new("leaves", reference_tex.key().clone()),
    ]);

    // The host hands us a duplicated instance of the same asset.
    let duplicate = TextureKey::new(99, "bark_albedo", 8, 8);
    let slots = renderer.material_slots();
    let slot = find_material_slot_using_texture(&slots, &duplicate).unwrap();
    assert_eq!(slot, 1);

    let mesh = quad_mesh(0.0, 0.0, 0.5, 0.75);
    let mask = build_occupancy_mask_for(
        &mesh,
        0,
        0,
        reference_tex.key().width,
        reference_tex.key().height,
        RasterMode::Filled,
    )
    .unwrap();
    assert!(mask.occupied_count() > 0);

    let mut target_tex =
        MemoryTexture::new(7, "rock_albedo", PixelBuffer::filled(8, 8, [1.0, 0.0, 0.0, 1.0]));

    let proc = TransferProcessor::auto();
    let mut working = target_tex.pixels().unwrap();
    proc.recolor(
        &mut working,
        &reference_tex.pixels().unwrap(),
        Some(&mask),
        &TransferConfig::default(),
    )
    .unwrap();
    target_tex.set_pixels(&working).unwrap();

    let result = target_tex.pixels().unwrap().pixel(4, 4);
    assert!(result[2] > 0.9, "expected blue after write-back: {result:?}");
}

#[test]
fn luminance_preservation_keeps_lightness() {
    use texmatch_color::rgb_to_lab;

    let proc = TransferProcessor::auto();
    let mut target = PixelBuffer::filled(8, 8, [0.5, 0.5, 0.5, 1.0]);
    let reference = PixelBuffer::filled(8, 8, [0.3, 0.3, 0.6, 1.0]);

    let original_l = rgb_to_lab([0.5, 0.5, 0.5])[0];
    let config = TransferConfig::default().with_preserve_luminance(true);
    proc.recolor(&mut target, &reference, None, &config).unwrap();

    let px = target.pixel(0, 0);
    let result_l = rgb_to_lab([px[0], px[1], px[2]])[0];
    assert_abs_diff_eq!(result_l, original_l, epsilon = 1.0);
}
