#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use std::fmt::Write as _;
use std::{env, fs, path::Path};

use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;

use datacenter_pipe_sizer::{
    chiller::{self, ChillerOption, ChillerSizingInput, ChillerStrategy, RedundancyModel},
    config::{self, UnitSystem},
    conversion, fluid_db,
    i18n::{self, keys},
    layout, piping,
    piping::flow,
    piping::sizing::{PipeSelection, PipeSizingInput, PipeSizingResult},
    quantity::QuantityKind,
    units::{
        convert_length, convert_pressure, convert_velocity, convert_volume_flow, LengthUnit,
        PressureUnit, VelocityUnit, VolumeFlowUnit,
    },
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/ko/en)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size(egui::vec2(1040.0, 720.0));
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        let resolved = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
        app_cfg.language = resolved;
    }
    eframe::run_native(
        "Data Center Pipe Sizer",
        native_options,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 한글 표시를 위한 폰트를 egui에 등록한다. 찾지 못하면 기본 폰트를 유지한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    let asset_path = Path::new("assets/fonts/malgun.ttf");
    if asset_path.exists() {
        let bytes = fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
        apply_font_bytes(ctx, bytes, "korean_font");
        return Ok(());
    }

    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = ["malgun.ttf", "malgunsl.ttf", "gulim.ttc", "batang.ttc"];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    let linux_candidates = [
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
    ];
    for cand in linux_candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p).map_err(|e| format!("Failed to read font ({cand}): {e}"))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    Err("Korean font not found. Falling back to the default fonts.".into())
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_string(), egui::FontData::from_owned(bytes));
    if let Some(family) = fonts.families.get_mut(&egui::FontFamily::Proportional) {
        family.insert(0, name.to_string());
    }
    if let Some(family) = fonts.families.get_mut(&egui::FontFamily::Monospace) {
        family.push(name.to_string());
    }
    ctx.set_fonts(fonts);
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    QuickSizing,
    LayoutAnalysis,
    ChillerSizing,
    UnitConv,
    Settings,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    tab: Tab,
    status: Option<String>,
    // 빠른 사이징
    quick_mw: f64,
    quick_delta_t: f64,
    quick_velocity: f64,
    quick_max_dp: f64,
    quick_fluid_idx: usize,
    quick_result: Option<String>,
    // 레이아웃 분석
    layout_str: String,
    layout_include_floors: bool,
    layout_mw_per_hall: f64,
    layout_fan_heat: f64,
    layout_delta_t: f64,
    layout_velocity: f64,
    layout_max_dp: f64,
    layout_fluid_idx: usize,
    layout_result: Option<String>,
    // 칠러 구성
    chiller_mw: f64,
    chiller_model: RedundancyModel,
    chiller_pct: f64,
    chiller_strategy: ChillerStrategy,
    chiller_max_units: u32,
    chiller_rate: f64,
    chiller_options: Vec<ChillerOption>,
    chiller_searched: bool,
    // 단위 변환
    conv_kind: QuantityKind,
    conv_value: f64,
    conv_from: String,
    conv_to: String,
    conv_result: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config) -> Self {
        let lang = i18n::resolve_language("auto", Some(config.language.as_str()));
        let tr = i18n::Translator::new(&lang);
        let design = config.design.clone();
        Self {
            tr,
            tab: Tab::QuickSizing,
            status: None,
            quick_mw: 60.0,
            quick_delta_t: design.delta_t_f,
            quick_velocity: design.max_velocity_ft_per_s,
            quick_max_dp: design.max_pressure_drop_psi,
            quick_fluid_idx: 0,
            quick_result: None,
            layout_str: "4x3x2".to_string(),
            layout_include_floors: false,
            layout_mw_per_hall: 1.0,
            layout_fan_heat: design.fan_heat_percent,
            layout_delta_t: design.delta_t_f,
            layout_velocity: design.max_velocity_ft_per_s,
            layout_max_dp: design.max_pressure_drop_psi,
            layout_fluid_idx: 0,
            layout_result: None,
            chiller_mw: 60.0,
            chiller_model: RedundancyModel::NPlus1,
            chiller_pct: design.redundancy_percent,
            chiller_strategy: ChillerStrategy::Balanced,
            chiller_max_units: design.max_chillers,
            chiller_rate: design.electricity_rate_per_kwh,
            chiller_options: Vec::new(),
            chiller_searched: false,
            conv_kind: QuantityKind::Temperature,
            conv_value: 0.0,
            conv_from: "F".to_string(),
            conv_to: "C".to_string(),
            conv_result: None,
            config,
        }
    }

    /// 사이드 메뉴를 제공한다.
    fn ui_nav(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.heading(self.tr.t(keys::GUI_NAV_HEADING));
            ui.add_space(8.0);
        });
        for (tab, label) in [
            (Tab::QuickSizing, self.tr.t(keys::GUI_TAB_QUICK)),
            (Tab::LayoutAnalysis, self.tr.t(keys::GUI_TAB_LAYOUT)),
            (Tab::ChillerSizing, self.tr.t(keys::GUI_TAB_CHILLER)),
            (Tab::UnitConv, self.tr.t(keys::GUI_TAB_UNIT_CONV)),
            (Tab::Settings, self.tr.t(keys::GUI_TAB_SETTINGS)),
        ] {
            let selected = self.tab == tab;
            let button = egui::Button::new(label)
                .fill(if selected {
                    ui.visuals().selection.bg_fill
                } else {
                    ui.visuals().extreme_bg_color
                })
                .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                self.tab = tab;
            }
            ui.add_space(4.0);
        }
    }

    fn fluid_combo(ui: &mut egui::Ui, label: &str, idx: &mut usize) {
        let fluids = fluid_db::standard_fluids();
        egui::ComboBox::from_label(label.to_string())
            .selected_text(fluids[*idx].name)
            .show_ui(ui, |ui| {
                for (i, fluid) in fluids.iter().enumerate() {
                    ui.selectable_value(idx, i, fluid.name);
                }
            });
    }

    fn ui_quick_sizing(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::QUICK_HEADING));
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("quick_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(self.tr.t(keys::PROMPT_COOLING_LOAD));
                    ui.add(egui::DragValue::new(&mut self.quick_mw).speed(1.0));
                    ui.end_row();
                    ui.label(self.tr.t(keys::PROMPT_DELTA_T));
                    ui.add(egui::DragValue::new(&mut self.quick_delta_t).speed(0.5));
                    ui.end_row();
                    ui.label(self.tr.t(keys::PROMPT_MAX_VELOCITY));
                    ui.add(egui::DragValue::new(&mut self.quick_velocity).speed(0.5));
                    ui.end_row();
                    ui.label(self.tr.t(keys::PROMPT_MAX_DP));
                    ui.add(egui::DragValue::new(&mut self.quick_max_dp).speed(0.5));
                    ui.end_row();
                });
            Self::fluid_combo(ui, self.tr.t(keys::GUI_FLUID), &mut self.quick_fluid_idx);
            ui.add_space(8.0);
            if ui.button(self.tr.t(keys::GUI_RUN_SIZING)).clicked() {
                let fluid = &fluid_db::standard_fluids()[self.quick_fluid_idx];
                let input = PipeSizingInput {
                    mass_flow_lb_per_h: flow::mw_to_mass_flow_lb_per_h(
                        self.quick_mw,
                        self.quick_delta_t,
                    ),
                    density_lb_per_ft3: fluid.density_lb_per_ft3,
                    viscosity_lb_per_ft_s: fluid.viscosity_lb_per_ft_s,
                    max_velocity_ft_per_s: self.quick_velocity,
                    max_pressure_drop_psi: self.quick_max_dp,
                };
                self.quick_result = Some(
                    match piping::size_pipe(&input, piping::schedule_40()) {
                        Ok(result) => format_sizing_result(&self.tr, &self.config, &result),
                        Err(e) => e.to_string(),
                    },
                );
            }
        });
        if let Some(result) = &self.quick_result {
            ui.add_space(8.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.monospace(result);
            });
        }
    }

    fn ui_layout_analysis(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::LAYOUT_HEADING));
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("layout_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(self.tr.t(keys::PROMPT_LAYOUT));
                    ui.text_edit_singleline(&mut self.layout_str);
                    ui.end_row();
                    ui.label(self.tr.t(keys::PROMPT_MW_PER_HALL));
                    ui.add(egui::DragValue::new(&mut self.layout_mw_per_hall).speed(0.1));
                    ui.end_row();
                    ui.label(self.tr.t(keys::PROMPT_FAN_HEAT));
                    ui.add(egui::DragValue::new(&mut self.layout_fan_heat).speed(0.5));
                    ui.end_row();
                    ui.label(self.tr.t(keys::PROMPT_DELTA_T));
                    ui.add(egui::DragValue::new(&mut self.layout_delta_t).speed(0.5));
                    ui.end_row();
                    ui.label(self.tr.t(keys::PROMPT_MAX_VELOCITY));
                    ui.add(egui::DragValue::new(&mut self.layout_velocity).speed(0.5));
                    ui.end_row();
                    ui.label(self.tr.t(keys::PROMPT_MAX_DP));
                    ui.add(egui::DragValue::new(&mut self.layout_max_dp).speed(0.5));
                    ui.end_row();
                });
            ui.checkbox(
                &mut self.layout_include_floors,
                self.tr.t(keys::PROMPT_INCLUDE_FLOORS),
            );
            Self::fluid_combo(ui, self.tr.t(keys::GUI_FLUID), &mut self.layout_fluid_idx);
            ui.add_space(8.0);
            if ui.button(self.tr.t(keys::GUI_RUN_SIZING)).clicked() {
                self.layout_result = Some(self.run_layout_analysis());
            }
        });
        if let Some(result) = &self.layout_result {
            ui.add_space(8.0);
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.monospace(result);
            });
        }
    }

    fn run_layout_analysis(&self) -> String {
        let tr = &self.tr;
        let parsed = match layout::parse_layout(&self.layout_str) {
            Ok(l) => l,
            Err(e) => return e.to_string(),
        };
        let hall_loads =
            layout::uniform_hall_loads(&parsed, self.layout_include_floors, self.layout_mw_per_hall);
        let fluid = &fluid_db::standard_fluids()[self.layout_fluid_idx];
        let total_it_mw: f64 = hall_loads.iter().map(|h| h.it_load_mw).sum();
        let total_cooling_mw = flow::cooling_load_mw(total_it_mw, self.layout_fan_heat);

        let mut out = String::new();
        let _ = writeln!(out, "{}", tr.t(keys::LAYOUT_SUMMARY_HEADING));
        let _ = writeln!(
            out,
            "{}x{}x{} ({})",
            parsed.columns,
            parsed.rows,
            parsed.floors,
            parsed.total_halls()
        );
        let _ = writeln!(out, "{}: {:.1} MW", tr.t(keys::LAYOUT_TOTAL_IT), total_it_mw);
        let _ = writeln!(
            out,
            "{}: {:.1} MW",
            tr.t(keys::LAYOUT_TOTAL_COOLING),
            total_cooling_mw
        );

        let main_input = PipeSizingInput {
            mass_flow_lb_per_h: flow::mw_to_mass_flow_lb_per_h(total_cooling_mw, self.layout_delta_t),
            density_lb_per_ft3: fluid.density_lb_per_ft3,
            viscosity_lb_per_ft_s: fluid.viscosity_lb_per_ft_s,
            max_velocity_ft_per_s: self.layout_velocity,
            max_pressure_drop_psi: self.layout_max_dp,
        };
        match piping::size_pipe(&main_input, piping::schedule_40()) {
            Ok(result) => {
                let _ = writeln!(out);
                out.push_str(&format_sizing_result(tr, &self.config, &result));
            }
            Err(e) => {
                let _ = writeln!(out, "{e}");
            }
        }

        let _ = writeln!(out, "\n{}", tr.t(keys::RISER_HEADING));
        let _ = writeln!(out, "{}", tr.t(keys::RISER_TABLE_HEADER));
        for agg in layout::column_aggregates(&hall_loads) {
            let col_cooling_mw = flow::cooling_load_mw(agg.total_mw, self.layout_fan_heat);
            let col_input = PipeSizingInput {
                mass_flow_lb_per_h: flow::mw_to_mass_flow_lb_per_h(
                    col_cooling_mw,
                    self.layout_delta_t,
                ),
                density_lb_per_ft3: fluid.density_lb_per_ft3,
                viscosity_lb_per_ft_s: fluid.viscosity_lb_per_ft_s,
                max_velocity_ft_per_s: self.layout_velocity,
                max_pressure_drop_psi: self.layout_max_dp,
            };
            match piping::size_pipe(&col_input, piping::schedule_40()) {
                Ok(result) => {
                    let size_label = match &result.selection {
                        PipeSelection::Standard { nominal, .. } => (*nominal).to_string(),
                        PipeSelection::Unresolved { inner_diameter_in } => {
                            format!("({inner_diameter_in:.1} in)")
                        }
                    };
                    let (vel, vel_unit) = display_velocity(&self.config, result.velocity_ft_per_s);
                    let (dp, dp_unit) = display_pressure(&self.config, result.pressure_drop_psi);
                    let _ = writeln!(
                        out,
                        "{:<8} {:<8.1} {:<9.1} {:<10} {:<6.1} {:<6} {:.2} {}",
                        agg.column,
                        agg.total_mw,
                        col_cooling_mw,
                        size_label,
                        vel,
                        vel_unit,
                        dp,
                        dp_unit
                    );
                }
                Err(e) => {
                    let _ = writeln!(out, "{:<8} {e}", agg.column);
                }
            }
        }
        out
    }

    fn ui_chiller_sizing(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::CHILLER_HEADING));
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("chiller_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(self.tr.t(keys::PROMPT_COOLING_LOAD));
                    ui.add(egui::DragValue::new(&mut self.chiller_mw).speed(1.0));
                    ui.end_row();
                    ui.label(self.tr.t(keys::PROMPT_MAX_CHILLERS));
                    ui.add(egui::DragValue::new(&mut self.chiller_max_units).speed(1.0));
                    ui.end_row();
                    ui.label(self.tr.t(keys::PROMPT_ELECTRICITY_RATE));
                    ui.add(egui::DragValue::new(&mut self.chiller_rate).speed(0.01));
                    ui.end_row();
                });
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.chiller_model, RedundancyModel::NPlus1, "N+1");
                ui.selectable_value(&mut self.chiller_model, RedundancyModel::NPlus2, "N+2");
                ui.selectable_value(&mut self.chiller_model, RedundancyModel::NPlusPercent, "N+%");
                if self.chiller_model == RedundancyModel::NPlusPercent {
                    ui.add(egui::DragValue::new(&mut self.chiller_pct).speed(1.0));
                    ui.label("%");
                }
            });
            ui.horizontal(|ui| {
                ui.selectable_value(&mut self.chiller_strategy, ChillerStrategy::Modular, "Modular");
                ui.selectable_value(&mut self.chiller_strategy, ChillerStrategy::Central, "Central");
                ui.selectable_value(
                    &mut self.chiller_strategy,
                    ChillerStrategy::Balanced,
                    "Balanced",
                );
            });
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                if ui.button(self.tr.t(keys::GUI_RUN_SEARCH)).clicked() {
                    let input = ChillerSizingInput {
                        total_mw: self.chiller_mw,
                        redundancy_model: self.chiller_model,
                        redundancy_percent: self.chiller_pct,
                        strategy: self.chiller_strategy,
                        max_chillers: self.chiller_max_units,
                        min_loading_percent: self.config.design.min_loading_percent,
                        max_loading_percent: self.config.design.max_loading_percent,
                        electricity_rate_per_kwh: self.chiller_rate,
                        annual_hours: self.config.design.annual_hours,
                    };
                    match chiller::search_configurations(&input, chiller::standard_catalog()) {
                        Ok(options) => {
                            self.chiller_options = options;
                            self.chiller_searched = true;
                            self.status = None;
                        }
                        Err(e) => {
                            self.chiller_options.clear();
                            self.chiller_searched = true;
                            self.status = Some(e.to_string());
                        }
                    }
                }
                if !self.chiller_options.is_empty()
                    && ui.button(self.tr.t(keys::GUI_EXPORT_CSV)).clicked()
                {
                    self.export_chiller_csv();
                }
            });
        });
        if let Some(status) = &self.status {
            ui.add_space(4.0);
            ui.label(status);
        }
        if self.chiller_searched {
            ui.add_space(8.0);
            if self.chiller_options.is_empty() {
                ui.label(self.tr.t(keys::CHILLER_NO_RESULT));
            } else {
                self.chiller_table(ui);
            }
        }
    }

    fn chiller_table(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("chiller_results")
                .num_columns(9)
                .striped(true)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    for head in [
                        "#", "MW", "ton", "Total", "Oper.", "Spare", "Load %", "10-yr TCO",
                        "TCO/MW",
                    ] {
                        ui.label(egui::RichText::new(head).strong());
                    }
                    ui.end_row();
                    for (i, opt) in self.chiller_options.iter().take(8).enumerate() {
                        ui.label(format!("{}", i + 1));
                        ui.label(format!("{:.2}", opt.size_mw));
                        ui.label(format!("{:.0}", opt.size_tons));
                        ui.label(format!("{}", opt.total_chillers));
                        ui.label(format!("{}", opt.operating_chillers));
                        ui.label(format!("{}", opt.redundant_chillers));
                        ui.label(format!("{:.1}", opt.loading_percent));
                        ui.label(format!("${:.0}", opt.ten_year_tco));
                        ui.label(format!("${:.0}", opt.tco_per_mw));
                        ui.end_row();
                    }
                });
        });
        if let Some(best) = self.chiller_options.first() {
            ui.add_space(4.0);
            ui.small(format!(
                "COP {:.1}, {:.2} kW/ton, {:.0} kWh/yr, redundancy {:.1}%",
                best.cop, best.kw_per_ton, best.annual_kwh, best.redundancy_percent
            ));
        }
    }

    fn export_chiller_csv(&mut self) {
        let Some(path) = FileDialog::new()
            .set_file_name("chiller_options.csv")
            .save_file()
        else {
            return;
        };
        let mut csv = String::from(
            "size_mw,size_tons,total,operating,redundant,loading_percent,redundancy_percent,\
             annual_kwh,annual_energy_cost,installation_cost,annual_maintenance_cost,\
             ten_year_tco,tco_per_mw\n",
        );
        for opt in &self.chiller_options {
            let _ = writeln!(
                csv,
                "{},{},{},{},{},{:.1},{:.1},{:.0},{:.0},{:.0},{:.0},{:.0},{:.0}",
                opt.size_mw,
                opt.size_tons,
                opt.total_chillers,
                opt.operating_chillers,
                opt.redundant_chillers,
                opt.loading_percent,
                opt.redundancy_percent,
                opt.annual_kwh,
                opt.annual_energy_cost,
                opt.installation_cost,
                opt.annual_maintenance_cost,
                opt.ten_year_tco,
                opt.tco_per_mw
            );
        }
        self.status = match fs::write(&path, csv) {
            Ok(()) => Some(format!(
                "{}: {}",
                self.tr.t(keys::GUI_EXPORTED),
                path.display()
            )),
            Err(e) => Some(e.to_string()),
        };
    }

    fn ui_unit_conv(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::UNIT_CONVERSION_HEADING));
        ui.add_space(8.0);
        let kind_labels: [(QuantityKind, &str); 10] = [
            (QuantityKind::Temperature, "Temperature"),
            (QuantityKind::TemperatureDifference, "ΔT"),
            (QuantityKind::Pressure, "Pressure"),
            (QuantityKind::Length, "Length"),
            (QuantityKind::Velocity, "Velocity"),
            (QuantityKind::Density, "Density"),
            (QuantityKind::Viscosity, "Viscosity"),
            (QuantityKind::MassFlow, "Mass flow"),
            (QuantityKind::VolumeFlow, "Volume flow"),
            (QuantityKind::CoolingLoad, "Cooling load"),
        ];
        egui::Frame::group(ui.style()).show(ui, |ui| {
            let current = kind_labels
                .iter()
                .find(|(k, _)| *k == self.conv_kind)
                .map(|(_, l)| *l)
                .unwrap_or("?");
            egui::ComboBox::from_id_source("conv_kind")
                .selected_text(current)
                .show_ui(ui, |ui| {
                    for (kind, label) in kind_labels {
                        ui.selectable_value(&mut self.conv_kind, kind, label);
                    }
                });
            egui::Grid::new("conv_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label(self.tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE));
                    ui.add(egui::DragValue::new(&mut self.conv_value).speed(0.1));
                    ui.end_row();
                    ui.label(self.tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT));
                    ui.text_edit_singleline(&mut self.conv_from);
                    ui.end_row();
                    ui.label(self.tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT));
                    ui.text_edit_singleline(&mut self.conv_to);
                    ui.end_row();
                });
            if ui.button(self.tr.t(keys::UNIT_CONVERSION_RESULT)).clicked() {
                self.conv_result = Some(
                    match conversion::convert(
                        self.conv_kind,
                        self.conv_value,
                        self.conv_from.trim(),
                        self.conv_to.trim(),
                    ) {
                        Ok(v) => format!("{v} {}", self.conv_to.trim()),
                        Err(e) => e.to_string(),
                    },
                );
            }
        });
        if let Some(result) = &self.conv_result {
            ui.add_space(8.0);
            ui.monospace(result);
        }
    }

    fn ui_settings(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::SETTINGS_HEADING));
        ui.add_space(8.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(self.tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM));
            ui.horizontal(|ui| {
                if ui
                    .selectable_label(self.config.unit_system == UnitSystem::Imperial, "Imperial")
                    .clicked()
                {
                    self.config.apply_unit_system(UnitSystem::Imperial);
                }
                if ui
                    .selectable_label(self.config.unit_system == UnitSystem::SI, "SI")
                    .clicked()
                {
                    self.config.apply_unit_system(UnitSystem::SI);
                }
            });
            ui.add_space(8.0);
            ui.label(self.tr.t(keys::SETTINGS_PROMPT_LANGUAGE));
            ui.text_edit_singleline(&mut self.config.language);
            ui.add_space(8.0);
            if ui.button(self.tr.t(keys::GUI_SAVE_SETTINGS)).clicked() {
                let lang =
                    i18n::resolve_language("auto", Some(self.config.language.as_str()));
                self.tr = i18n::Translator::new(&lang);
                self.status = match self.config.save() {
                    Ok(()) => Some(self.tr.t(keys::SETTINGS_SAVED).to_string()),
                    Err(e) => Some(e.to_string()),
                };
            }
            if let Some(status) = &self.status {
                ui.add_space(4.0);
                ui.label(status);
            }
        });
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::SidePanel::left("nav")
            .resizable(false)
            .default_width(180.0)
            .show(ctx, |ui| {
                self.ui_nav(ui);
            });
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| match self.tab {
                Tab::QuickSizing => self.ui_quick_sizing(ui),
                Tab::LayoutAnalysis => self.ui_layout_analysis(ui),
                Tab::ChillerSizing => self.ui_chiller_sizing(ui),
                Tab::UnitConv => self.ui_unit_conv(ui),
                Tab::Settings => self.ui_settings(ui),
            });
        });
    }
}

/// 배관 사이징 결과를 설정된 단위 시스템으로 포맷한다.
fn format_sizing_result(
    tr: &i18n::Translator,
    cfg: &config::Config,
    result: &PipeSizingResult,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", tr.t(keys::RESULT_PIPE_HEADING));
    match &result.selection {
        PipeSelection::Standard {
            nominal,
            inner_diameter_in,
        } => {
            let _ = writeln!(out, "{}: {}", tr.t(keys::RESULT_STANDARD_SIZE), nominal);
            let (id, id_unit) = display_diameter(cfg, *inner_diameter_in);
            let _ = writeln!(out, "{}: {:.1} {}", tr.t(keys::RESULT_ACTUAL_ID), id, id_unit);
        }
        PipeSelection::Unresolved { inner_diameter_in } => {
            let (id, id_unit) = display_diameter(cfg, *inner_diameter_in);
            let _ = writeln!(out, "{}: {:.1} {}", tr.t(keys::RESULT_RAW_ID), id, id_unit);
            let _ = writeln!(out, "{}", tr.t(keys::RESULT_UNRESOLVED_NOTE));
        }
    }
    let (q, q_unit) = display_flow(cfg, result.flow_gpm);
    let _ = writeln!(out, "{}: {:.0} {}", tr.t(keys::RESULT_FLOW), q, q_unit);
    let (v, v_unit) = display_velocity(cfg, result.velocity_ft_per_s);
    let _ = writeln!(out, "{}: {:.1} {}", tr.t(keys::RESULT_VELOCITY), v, v_unit);
    let _ = writeln!(
        out,
        "{}: {:.2e}",
        tr.t(keys::RESULT_REYNOLDS),
        result.reynolds_number
    );
    let _ = writeln!(
        out,
        "{}: {:.4}",
        tr.t(keys::RESULT_FRICTION),
        result.friction_factor
    );
    let (dp, dp_unit) = display_pressure(cfg, result.pressure_drop_psi);
    let _ = writeln!(out, "{}: {:.2} {}", tr.t(keys::RESULT_DP), dp, dp_unit);
    if result.velocity_ft_per_s > 10.0 {
        let _ = writeln!(out, "{}", tr.t(keys::WARN_HIGH_VELOCITY));
    }
    out
}

fn display_velocity(cfg: &config::Config, velocity_ft_per_s: f64) -> (f64, &'static str) {
    let unit = cfg.default_units.velocity;
    let label = match unit {
        VelocityUnit::FootPerSecond => "ft/s",
        VelocityUnit::MeterPerSecond => "m/s",
    };
    (
        convert_velocity(velocity_ft_per_s, VelocityUnit::FootPerSecond, unit),
        label,
    )
}

fn display_pressure(cfg: &config::Config, pressure_psi: f64) -> (f64, &'static str) {
    let unit = cfg.default_units.pressure;
    let label = match unit {
        PressureUnit::Psi => "psi",
        PressureUnit::Psf => "psf",
        PressureUnit::Bar => "bar",
        PressureUnit::KiloPascal => "kPa",
        PressureUnit::Pascal => "Pa",
    };
    (convert_pressure(pressure_psi, PressureUnit::Psi, unit), label)
}

fn display_diameter(cfg: &config::Config, diameter_in: f64) -> (f64, &'static str) {
    let unit = cfg.default_units.length;
    let label = match unit {
        LengthUnit::Foot => "ft",
        LengthUnit::Inch => "in",
        LengthUnit::Meter => "m",
        LengthUnit::Millimeter => "mm",
    };
    (convert_length(diameter_in, LengthUnit::Inch, unit), label)
}

fn display_flow(cfg: &config::Config, flow_gpm: f64) -> (f64, &'static str) {
    let unit = cfg.default_units.volume_flow;
    let label = match unit {
        VolumeFlowUnit::GallonPerMinute => "GPM",
        VolumeFlowUnit::CubicFootPerSecond => "ft3/s",
        VolumeFlowUnit::CubicMeterPerHour => "m3/h",
        VolumeFlowUnit::LiterPerSecond => "L/s",
    };
    (
        convert_volume_flow(flow_gpm, VolumeFlowUnit::GallonPerMinute, unit),
        label,
    )
}
