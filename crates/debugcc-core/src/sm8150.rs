//! SM8150 debug clock controller data.
//!
//! Routing for every clock the SM8150 debug mux can observe, across the
//! global controller and the camera, display, GPU, NPU, video, CPU and
//! memory-controller clock controllers.

use crate::block::BlockId::{CamCc, CpuCc, DispCc, Gcc, GpuCc, McCc, NpuCc, VideoCc};
use crate::descriptor::{BitField, DebugMuxLayout, MuxDescriptor};
use crate::table::MuxDescriptorTable;
use debugcc_common::error::DebugccResult;

/// Global debug mux geometry.
pub const LAYOUT: DebugMuxLayout = DebugMuxLayout {
    debug_offset: 0x62000,
    post_div_offset: 0x62004,
    cbcr_offset: 0x62008,
    src_sel_field: BitField::new(0x3FF, 0),
    post_div_field: BitField::new(0xF, 0),
    counter_ctl_offset: 0x62038,
    counter_status_offset: 0x6203C,
    reference_cbcr_offset: 0x43008,
};

/// Build the validated SM8150 table.
///
/// # Errors
///
/// Returns a configuration error if the static data violates a table invariant.
pub fn table() -> DebugccResult<MuxDescriptorTable> {
    MuxDescriptorTable::new(LAYOUT, DESCRIPTORS.iter().copied())
}

/// Descriptors in debug mux parent order.
#[rustfmt::skip]
pub const DESCRIPTORS: &[MuxDescriptor] = &[
    MuxDescriptor::new("cam_cc_bps_ahb_clk", 0x55, 1, CamCc, 0xE, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_bps_areg_clk", 0x55, 1, CamCc, 0xD, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_bps_axi_clk", 0x55, 1, CamCc, 0xC, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_bps_clk", 0x55, 1, CamCc, 0xB, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_camnoc_axi_clk", 0x55, 1, CamCc, 0x27, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_camnoc_dcd_xo_clk", 0x55, 1, CamCc, 0x33, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_cci_0_clk", 0x55, 1, CamCc, 0x2A, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_cci_1_clk", 0x55, 1, CamCc, 0x3B, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_core_ahb_clk", 0x55, 1, CamCc, 0x2E, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_cpas_ahb_clk", 0x55, 1, CamCc, 0x2C, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_csi0phytimer_clk", 0x55, 1, CamCc, 0x5, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_csi1phytimer_clk", 0x55, 1, CamCc, 0x7, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_csi2phytimer_clk", 0x55, 1, CamCc, 0x9, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_csi3phytimer_clk", 0x55, 1, CamCc, 0x35, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_csiphy0_clk", 0x55, 1, CamCc, 0x6, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_csiphy1_clk", 0x55, 1, CamCc, 0x8, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_csiphy2_clk", 0x55, 1, CamCc, 0xA, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_csiphy3_clk", 0x55, 1, CamCc, 0x36, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_fd_core_clk", 0x55, 1, CamCc, 0x28, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_fd_core_uar_clk", 0x55, 1, CamCc, 0x29, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_icp_ahb_clk", 0x55, 1, CamCc, 0x37, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_icp_clk", 0x55, 1, CamCc, 0x26, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_ife_0_axi_clk", 0x55, 1, CamCc, 0x1B, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_ife_0_clk", 0x55, 1, CamCc, 0x17, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_ife_0_cphy_rx_clk", 0x55, 1, CamCc, 0x1A, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_ife_0_csid_clk", 0x55, 1, CamCc, 0x19, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_ife_0_dsp_clk", 0x55, 1, CamCc, 0x18, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_ife_1_axi_clk", 0x55, 1, CamCc, 0x21, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_ife_1_clk", 0x55, 1, CamCc, 0x1D, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_ife_1_cphy_rx_clk", 0x55, 1, CamCc, 0x20, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_ife_1_csid_clk", 0x55, 1, CamCc, 0x1F, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_ife_1_dsp_clk", 0x55, 1, CamCc, 0x1E, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_ife_lite_0_clk", 0x55, 1, CamCc, 0x22, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_ife_lite_0_cphy_rx_clk", 0x55, 1, CamCc, 0x24, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_ife_lite_0_csid_clk", 0x55, 1, CamCc, 0x23, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_ife_lite_1_clk", 0x55, 1, CamCc, 0x38, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_ife_lite_1_cphy_rx_clk", 0x55, 1, CamCc, 0x3A, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_ife_lite_1_csid_clk", 0x55, 1, CamCc, 0x39, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_ipe_0_ahb_clk", 0x55, 1, CamCc, 0x12, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_ipe_0_areg_clk", 0x55, 1, CamCc, 0x11, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_ipe_0_axi_clk", 0x55, 1, CamCc, 0x10, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_ipe_0_clk", 0x55, 1, CamCc, 0xF, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_ipe_1_ahb_clk", 0x55, 1, CamCc, 0x16, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_ipe_1_areg_clk", 0x55, 1, CamCc, 0x15, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_ipe_1_axi_clk", 0x55, 1, CamCc, 0x14, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_ipe_1_clk", 0x55, 1, CamCc, 0x13, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_jpeg_clk", 0x55, 1, CamCc, 0x25, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_lrme_clk", 0x55, 1, CamCc, 0x2B, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_mclk0_clk", 0x55, 1, CamCc, 0x1, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_mclk1_clk", 0x55, 1, CamCc, 0x2, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_mclk2_clk", 0x55, 1, CamCc, 0x3, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("cam_cc_mclk3_clk", 0x55, 1, CamCc, 0x4, 0xFF, 0, 0xF, 0, 4, 0xD000, 0xD004, Some(0xD008)),
    MuxDescriptor::new("disp_cc_mdss_ahb_clk", 0x56, 1, DispCc, 0x2B, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_byte0_clk", 0x56, 1, DispCc, 0x15, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_byte0_intf_clk", 0x56, 1, DispCc, 0x16, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_byte1_clk", 0x56, 1, DispCc, 0x17, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_byte1_intf_clk", 0x56, 1, DispCc, 0x18, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_dp_aux1_clk", 0x56, 1, DispCc, 0x25, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_dp_aux_clk", 0x56, 1, DispCc, 0x20, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_dp_crypto1_clk", 0x56, 1, DispCc, 0x24, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_dp_crypto_clk", 0x56, 1, DispCc, 0x1D, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_dp_link1_clk", 0x56, 1, DispCc, 0x22, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_dp_link1_intf_clk", 0x56, 1, DispCc, 0x23, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_dp_link_clk", 0x56, 1, DispCc, 0x1B, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_dp_link_intf_clk", 0x56, 1, DispCc, 0x1C, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_dp_pixel1_clk", 0x56, 1, DispCc, 0x1F, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_dp_pixel2_clk", 0x56, 1, DispCc, 0x21, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_dp_pixel_clk", 0x56, 1, DispCc, 0x1E, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_edp_aux_clk", 0x56, 1, DispCc, 0x29, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_edp_gtc_clk", 0x56, 1, DispCc, 0x2A, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_edp_link_clk", 0x56, 1, DispCc, 0x27, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_edp_link_intf_clk", 0x56, 1, DispCc, 0x28, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_edp_pixel_clk", 0x56, 1, DispCc, 0x26, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_esc0_clk", 0x56, 1, DispCc, 0x19, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_esc1_clk", 0x56, 1, DispCc, 0x1A, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_mdp_clk", 0x56, 1, DispCc, 0x11, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_mdp_lut_clk", 0x56, 1, DispCc, 0x13, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_non_gdsc_ahb_clk", 0x56, 1, DispCc, 0x2C, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_pclk0_clk", 0x56, 1, DispCc, 0xF, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_pclk1_clk", 0x56, 1, DispCc, 0x10, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_rot_clk", 0x56, 1, DispCc, 0x12, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_rscc_ahb_clk", 0x56, 1, DispCc, 0x2E, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_rscc_vsync_clk", 0x56, 1, DispCc, 0x2D, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_mdss_vsync_clk", 0x56, 1, DispCc, 0x14, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("disp_cc_xo_clk", 0x56, 1, DispCc, 0x36, 0xFF, 0, 0x3, 0, 4, 0x7000, 0x5008, Some(0x500C)),
    MuxDescriptor::new("measure_only_cdsp_clk", 0xDB, 2, Gcc, 0xDB, 0x3FF, 0, 0xF, 0, 2, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("measure_only_snoc_clk", 0x7, 1, Gcc, 0x7, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("measure_only_cnoc_clk", 0x19, 1, Gcc, 0x19, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("measure_only_mccc_clk", 0xD0, 1, McCc, 0xD0, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("measure_only_ipa_2x_clk", 0x147, 1, Gcc, 0x147, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_aggre_noc_pcie_tbu_clk", 0x36, 1, Gcc, 0x36, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_aggre_ufs_card_axi_clk", 0x141, 1, Gcc, 0x141, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_aggre_ufs_phy_axi_clk", 0x140, 1, Gcc, 0x140, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_aggre_usb3_prim_axi_clk", 0x13E, 1, Gcc, 0x13E, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_aggre_usb3_sec_axi_clk", 0x13F, 1, Gcc, 0x13F, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_camera_ahb_clk", 0x43, 1, Gcc, 0x43, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_camera_hf_axi_clk", 0x4D, 1, Gcc, 0x4D, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_camera_sf_axi_clk", 0x4E, 1, Gcc, 0x4E, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_camera_xo_clk", 0x52, 1, Gcc, 0x52, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_ce1_ahb_clk", 0xB6, 1, Gcc, 0xB6, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_ce1_axi_clk", 0xB5, 1, Gcc, 0xB5, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_ce1_clk", 0xB4, 1, Gcc, 0xB4, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_cfg_noc_usb3_prim_axi_clk", 0x22, 1, Gcc, 0x22, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_cfg_noc_usb3_sec_axi_clk", 0x23, 1, Gcc, 0x23, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_cpuss_ahb_clk", 0xE0, 1, Gcc, 0xE0, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_cpuss_rbcpr_clk", 0xE2, 1, Gcc, 0xE2, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_ddrss_gpu_axi_clk", 0xC0, 1, Gcc, 0xC0, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_disp_ahb_clk", 0x44, 1, Gcc, 0x44, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_disp_hf_axi_clk", 0x4F, 1, Gcc, 0x4F, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_disp_sf_axi_clk", 0x50, 1, Gcc, 0x50, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_disp_xo_clk", 0x53, 1, Gcc, 0x53, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_emac_axi_clk", 0x18D, 1, Gcc, 0x18D, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_emac_ptp_clk", 0x190, 1, Gcc, 0x190, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_emac_rgmii_clk", 0x18F, 1, Gcc, 0x18F, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_emac_slv_ahb_clk", 0x18E, 1, Gcc, 0x18E, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_gp1_clk", 0xF0, 1, Gcc, 0xF0, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_gp2_clk", 0xF1, 1, Gcc, 0xF1, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_gp3_clk", 0xF2, 1, Gcc, 0xF2, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_gpu_cfg_ahb_clk", 0x160, 1, Gcc, 0x160, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_gpu_gpll0_clk_src", 0x166, 1, Gcc, 0x166, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_gpu_gpll0_div_clk_src", 0x167, 1, Gcc, 0x167, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_gpu_memnoc_gfx_clk", 0x163, 1, Gcc, 0x163, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_gpu_snoc_dvm_gfx_clk", 0x165, 1, Gcc, 0x165, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_npu_at_clk", 0x17D, 1, Gcc, 0x17D, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_npu_axi_clk", 0x17B, 1, Gcc, 0x17B, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_npu_cfg_ahb_clk", 0x17A, 1, Gcc, 0x17A, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_npu_gpll0_clk_src", 0x17E, 1, Gcc, 0x17E, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_npu_gpll0_div_clk_src", 0x17F, 1, Gcc, 0x17F, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_npu_trig_clk", 0x17C, 1, Gcc, 0x17C, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_pcie0_phy_refgen_clk", 0x104, 1, Gcc, 0x104, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_pcie1_phy_refgen_clk", 0x105, 1, Gcc, 0x105, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_pcie_0_aux_clk", 0xF7, 1, Gcc, 0xF7, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_pcie_0_cfg_ahb_clk", 0xF6, 1, Gcc, 0xF6, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_pcie_0_mstr_axi_clk", 0xF5, 1, Gcc, 0xF5, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_pcie_0_pipe_clk", 0xF8, 1, Gcc, 0xF8, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_pcie_0_slv_axi_clk", 0xF4, 1, Gcc, 0xF4, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_pcie_0_slv_q2a_axi_clk", 0xF3, 1, Gcc, 0xF3, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_pcie_1_aux_clk", 0xFF, 1, Gcc, 0xFF, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_pcie_1_cfg_ahb_clk", 0xFE, 1, Gcc, 0xFE, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_pcie_1_mstr_axi_clk", 0xFD, 1, Gcc, 0xFD, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_pcie_1_pipe_clk", 0x100, 1, Gcc, 0x100, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_pcie_1_slv_axi_clk", 0xFC, 1, Gcc, 0xFC, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_pcie_1_slv_q2a_axi_clk", 0xFB, 1, Gcc, 0xFB, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_pcie_phy_aux_clk", 0x103, 1, Gcc, 0x103, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_pdm2_clk", 0x9A, 1, Gcc, 0x9A, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_pdm_ahb_clk", 0x98, 1, Gcc, 0x98, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_pdm_xo4_clk", 0x99, 1, Gcc, 0x99, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_prng_ahb_clk", 0x9B, 1, Gcc, 0x9B, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qspi_cnoc_periph_ahb_clk", 0x178, 1, Gcc, 0x178, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qspi_core_clk", 0x179, 1, Gcc, 0x179, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap0_core_2x_clk", 0x85, 1, Gcc, 0x85, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap0_core_clk", 0x84, 1, Gcc, 0x84, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap0_s0_clk", 0x86, 1, Gcc, 0x86, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap0_s1_clk", 0x87, 1, Gcc, 0x87, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap0_s2_clk", 0x88, 1, Gcc, 0x88, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap0_s3_clk", 0x89, 1, Gcc, 0x89, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap0_s4_clk", 0x8A, 1, Gcc, 0x8A, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap0_s5_clk", 0x8B, 1, Gcc, 0x8B, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap0_s6_clk", 0x8C, 1, Gcc, 0x8C, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap0_s7_clk", 0x8D, 1, Gcc, 0x8D, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap1_core_2x_clk", 0x91, 1, Gcc, 0x91, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap1_core_clk", 0x90, 1, Gcc, 0x90, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap1_s0_clk", 0x92, 1, Gcc, 0x92, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap1_s1_clk", 0x93, 1, Gcc, 0x93, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap1_s2_clk", 0x94, 1, Gcc, 0x94, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap1_s3_clk", 0x95, 1, Gcc, 0x95, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap1_s4_clk", 0x96, 1, Gcc, 0x96, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap1_s5_clk", 0x97, 1, Gcc, 0x97, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap2_core_2x_clk", 0x184, 1, Gcc, 0x184, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap2_core_clk", 0x183, 1, Gcc, 0x183, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap2_s0_clk", 0x185, 1, Gcc, 0x185, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap2_s1_clk", 0x186, 1, Gcc, 0x186, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap2_s2_clk", 0x187, 1, Gcc, 0x187, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap2_s3_clk", 0x188, 1, Gcc, 0x188, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap2_s4_clk", 0x189, 1, Gcc, 0x189, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_qupv3_wrap2_s5_clk", 0x18A, 1, Gcc, 0x18A, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_sdcc2_ahb_clk", 0x7F, 1, Gcc, 0x7F, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_sdcc2_apps_clk", 0x7E, 1, Gcc, 0x7E, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_sdcc4_ahb_clk", 0x81, 1, Gcc, 0x81, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_sdcc4_apps_clk", 0x80, 1, Gcc, 0x80, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_sys_noc_cpuss_ahb_clk", 0xC, 1, Gcc, 0xC, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_tsif_ahb_clk", 0x9C, 1, Gcc, 0x9C, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_tsif_ref_clk", 0x9D, 1, Gcc, 0x9D, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_ufs_card_ahb_clk", 0x107, 1, Gcc, 0x107, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_ufs_card_axi_clk", 0x106, 1, Gcc, 0x106, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_ufs_card_ice_core_clk", 0x10D, 1, Gcc, 0x10D, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_ufs_card_phy_aux_clk", 0x10E, 1, Gcc, 0x10E, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_ufs_card_rx_symbol_0_clk", 0x109, 1, Gcc, 0x109, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_ufs_card_rx_symbol_1_clk", 0x10F, 1, Gcc, 0x10F, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_ufs_card_tx_symbol_0_clk", 0x108, 1, Gcc, 0x108, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_ufs_card_unipro_core_clk", 0x10C, 1, Gcc, 0x10C, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_ufs_phy_ahb_clk", 0x113, 1, Gcc, 0x113, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_ufs_phy_axi_clk", 0x112, 1, Gcc, 0x112, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_ufs_phy_ice_core_clk", 0x119, 1, Gcc, 0x119, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_ufs_phy_phy_aux_clk", 0x11A, 1, Gcc, 0x11A, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_ufs_phy_rx_symbol_0_clk", 0x115, 1, Gcc, 0x115, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_ufs_phy_rx_symbol_1_clk", 0x11B, 1, Gcc, 0x11B, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_ufs_phy_tx_symbol_0_clk", 0x114, 1, Gcc, 0x114, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_ufs_phy_unipro_core_clk", 0x118, 1, Gcc, 0x118, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_usb30_prim_master_clk", 0x6B, 1, Gcc, 0x6B, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_usb30_prim_mock_utmi_clk", 0x6D, 1, Gcc, 0x6D, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_usb30_sec_master_clk", 0x72, 1, Gcc, 0x72, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_usb30_sec_mock_utmi_clk", 0x74, 1, Gcc, 0x74, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_usb3_prim_phy_aux_clk", 0x6E, 1, Gcc, 0x6E, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_usb3_prim_phy_com_aux_clk", 0x6F, 1, Gcc, 0x6F, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_usb3_prim_phy_pipe_clk", 0x70, 1, Gcc, 0x70, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_usb3_sec_phy_aux_clk", 0x75, 1, Gcc, 0x75, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_usb3_sec_phy_com_aux_clk", 0x76, 1, Gcc, 0x76, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_usb3_sec_phy_pipe_clk", 0x77, 1, Gcc, 0x77, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_video_ahb_clk", 0x42, 1, Gcc, 0x42, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_video_axi0_clk", 0x4A, 1, Gcc, 0x4A, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_video_axi1_clk", 0x4B, 1, Gcc, 0x4B, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_video_axic_clk", 0x4C, 1, Gcc, 0x4C, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gcc_video_xo_clk", 0x51, 1, Gcc, 0x51, 0x3FF, 0, 0xF, 0, 1, 0x62000, 0x62004, Some(0x62008)),
    MuxDescriptor::new("gpu_cc_ahb_clk", 0x162, 1, GpuCc, 0x10, 0xFF, 0, 0x3, 0, 2, 0x1568, 0x10FC, Some(0x1100)),
    MuxDescriptor::new("gpu_cc_cx_apb_clk", 0x162, 1, GpuCc, 0x14, 0xFF, 0, 0x3, 0, 2, 0x1568, 0x10FC, Some(0x1100)),
    MuxDescriptor::new("gpu_cc_cx_gmu_clk", 0x162, 1, GpuCc, 0x18, 0xFF, 0, 0x3, 0, 2, 0x1568, 0x10FC, Some(0x1100)),
    MuxDescriptor::new("gpu_cc_cx_qdss_at_clk", 0x162, 1, GpuCc, 0x12, 0xFF, 0, 0x3, 0, 2, 0x1568, 0x10FC, Some(0x1100)),
    MuxDescriptor::new("gpu_cc_cx_qdss_trig_clk", 0x162, 1, GpuCc, 0x17, 0xFF, 0, 0x3, 0, 2, 0x1568, 0x10FC, Some(0x1100)),
    MuxDescriptor::new("gpu_cc_cx_snoc_dvm_clk", 0x162, 1, GpuCc, 0x15, 0xFF, 0, 0x3, 0, 2, 0x1568, 0x10FC, Some(0x1100)),
    MuxDescriptor::new("gpu_cc_cxo_aon_clk", 0x162, 1, GpuCc, 0xA, 0xFF, 0, 0x3, 0, 2, 0x1568, 0x10FC, Some(0x1100)),
    MuxDescriptor::new("gpu_cc_cxo_clk", 0x162, 1, GpuCc, 0x19, 0xFF, 0, 0x3, 0, 2, 0x1568, 0x10FC, Some(0x1100)),
    MuxDescriptor::new("gpu_cc_gx_gmu_clk", 0x162, 1, GpuCc, 0xF, 0xFF, 0, 0x3, 0, 2, 0x1568, 0x10FC, Some(0x1100)),
    MuxDescriptor::new("gpu_cc_gx_vsense_clk", 0x162, 1, GpuCc, 0xC, 0xFF, 0, 0x3, 0, 2, 0x1568, 0x10FC, Some(0x1100)),
    MuxDescriptor::new("measure_only_gpu_cc_cx_gfx3d_clk", 0x162, 1, GpuCc, 0x1A, 0xFF, 0, 0x3, 0, 2, 0x1568, 0x10FC, Some(0x1100)),
    MuxDescriptor::new("measure_only_gpu_cc_cx_gfx3d_slv_clk", 0x162, 1, GpuCc, 0x1B, 0xFF, 0, 0x3, 0, 2, 0x1568, 0x10FC, Some(0x1100)),
    MuxDescriptor::new("measure_only_gpu_cc_gx_gfx3d_clk", 0x162, 1, GpuCc, 0xB, 0xFF, 0, 0x3, 0, 2, 0x1568, 0x10FC, Some(0x1100)),
    MuxDescriptor::new("npu_cc_armwic_core_clk", 0x180, 1, NpuCc, 0x4, 0xFF, 0, 0x3, 0, 2, 0x4000, 0x3004, Some(0x3008)),
    MuxDescriptor::new("npu_cc_bto_core_clk", 0x180, 1, NpuCc, 0x12, 0xFF, 0, 0x3, 0, 2, 0x4000, 0x3004, Some(0x3008)),
    MuxDescriptor::new("npu_cc_bwmon_clk", 0x180, 1, NpuCc, 0xF, 0xFF, 0, 0x3, 0, 2, 0x4000, 0x3004, Some(0x3008)),
    MuxDescriptor::new("npu_cc_cal_dp_cdc_clk", 0x180, 1, NpuCc, 0x8, 0xFF, 0, 0x3, 0, 2, 0x4000, 0x3004, Some(0x3008)),
    MuxDescriptor::new("npu_cc_cal_dp_clk", 0x180, 1, NpuCc, 0x1, 0xFF, 0, 0x3, 0, 2, 0x4000, 0x3004, Some(0x3008)),
    MuxDescriptor::new("npu_cc_comp_noc_axi_clk", 0x180, 1, NpuCc, 0x9, 0xFF, 0, 0x3, 0, 2, 0x4000, 0x3004, Some(0x3008)),
    MuxDescriptor::new("npu_cc_conf_noc_ahb_clk", 0x180, 1, NpuCc, 0xA, 0xFF, 0, 0x3, 0, 2, 0x4000, 0x3004, Some(0x3008)),
    MuxDescriptor::new("npu_cc_npu_core_apb_clk", 0x180, 1, NpuCc, 0xE, 0xFF, 0, 0x3, 0, 2, 0x4000, 0x3004, Some(0x3008)),
    MuxDescriptor::new("npu_cc_npu_core_atb_clk", 0x180, 1, NpuCc, 0xB, 0xFF, 0, 0x3, 0, 2, 0x4000, 0x3004, Some(0x3008)),
    MuxDescriptor::new("npu_cc_npu_core_clk", 0x180, 1, NpuCc, 0x2, 0xFF, 0, 0x3, 0, 2, 0x4000, 0x3004, Some(0x3008)),
    MuxDescriptor::new("npu_cc_npu_core_cti_clk", 0x180, 1, NpuCc, 0xC, 0xFF, 0, 0x3, 0, 2, 0x4000, 0x3004, Some(0x3008)),
    MuxDescriptor::new("npu_cc_npu_cpc_clk", 0x180, 1, NpuCc, 0x3, 0xFF, 0, 0x3, 0, 2, 0x4000, 0x3004, Some(0x3008)),
    MuxDescriptor::new("npu_cc_perf_cnt_clk", 0x180, 1, NpuCc, 0x10, 0xFF, 0, 0x3, 0, 2, 0x4000, 0x3004, Some(0x3008)),
    MuxDescriptor::new("npu_cc_xo_clk", 0x180, 1, NpuCc, 0x11, 0xFF, 0, 0x3, 0, 2, 0x4000, 0x3004, Some(0x3008)),
    MuxDescriptor::new("video_cc_iris_ahb_clk", 0x57, 1, VideoCc, 0x7, 0x3F, 0, 0x7, 0, 5, 0xA4C, 0x938, Some(0x940)),
    MuxDescriptor::new("video_cc_mvs0_core_clk", 0x57, 1, VideoCc, 0x3, 0x3F, 0, 0x7, 0, 5, 0xA4C, 0x938, Some(0x940)),
    MuxDescriptor::new("video_cc_mvs1_core_clk", 0x57, 1, VideoCc, 0x5, 0x3F, 0, 0x7, 0, 5, 0xA4C, 0x938, Some(0x940)),
    MuxDescriptor::new("video_cc_mvsc_core_clk", 0x57, 1, VideoCc, 0x1, 0x3F, 0, 0x7, 0, 5, 0xA4C, 0x938, Some(0x940)),
    MuxDescriptor::new("video_cc_xo_clk", 0x57, 1, VideoCc, 0x8, 0x3F, 0, 0x7, 0, 5, 0xA4C, 0x938, Some(0x940)),
    MuxDescriptor::new("l3_clk", 0xE8, 4, CpuCc, 0x46, 0x7F, 4, 0xF, 11, 1, 0x0, 0x0, None)
        .with_misc_select_shift(16),
    MuxDescriptor::new("pwrcl_clk", 0xE8, 4, CpuCc, 0x44, 0x7F, 4, 0xF, 11, 1, 0x0, 0x0, None)
        .with_misc_select_shift(16),
    MuxDescriptor::new("perfcl_clk", 0xE8, 4, CpuCc, 0x45, 0x7F, 4, 0xF, 11, 1, 0x0, 0x0, None)
        .with_misc_select_shift(16),
    MuxDescriptor::new("perfpcl_clk", 0xE8, 4, CpuCc, 0x47, 0x7F, 4, 0xF, 11, 1, 0x0, 0x0, None)
        .with_misc_select_shift(16),
];
