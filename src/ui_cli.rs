use std::io::{self, Write};

use crate::app::AppError;
use crate::chiller::{
    self, ChillerOption, ChillerSizingInput, ChillerStrategy, RedundancyModel,
};
use crate::config::{Config, UnitSystem};
use crate::conversion;
use crate::fluid_db::{self, FluidData};
use crate::i18n::{keys, Translator};
use crate::layout::{self, HallLoad, Layout};
use crate::piping::{
    self, flow,
    sizing::{PipeSelection, PipeSizingInput, PipeSizingResult},
};
use crate::quantity::QuantityKind;
use crate::units::{
    convert_length, convert_pressure, convert_velocity, convert_volume_flow, LengthUnit,
    PressureUnit, VelocityUnit, VolumeFlowUnit,
};

/// 유속 경고 기준 [ft/s].
const VELOCITY_WARN_FT_PER_S: f64 = 10.0;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    QuickSizing,
    LayoutAnalysis,
    ChillerSizing,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("\n{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("1) {}", tr.t(keys::MAIN_MENU_QUICK_SIZING));
    println!("2) {}", tr.t(keys::MAIN_MENU_LAYOUT_ANALYSIS));
    println!("3) {}", tr.t(keys::MAIN_MENU_CHILLER_SIZING));
    println!("4) {}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("5) {}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("0) {}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::QuickSizing),
            "2" => return Ok(MenuChoice::LayoutAnalysis),
            "3" => return Ok(MenuChoice::ChillerSizing),
            "4" => return Ok(MenuChoice::UnitConversion),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 빠른 배관 사이징 메뉴를 처리한다.
pub fn handle_quick_sizing(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("\n{}", tr.t(keys::QUICK_HEADING));
    let mw = read_positive_f64(tr, tr.t(keys::PROMPT_COOLING_LOAD))?;
    let delta_t = read_f64_default(tr, tr.t(keys::PROMPT_DELTA_T), cfg.design.delta_t_f)?;
    let max_velocity = read_f64_default(
        tr,
        tr.t(keys::PROMPT_MAX_VELOCITY),
        cfg.design.max_velocity_ft_per_s,
    )?;
    let max_dp = read_f64_default(
        tr,
        tr.t(keys::PROMPT_MAX_DP),
        cfg.design.max_pressure_drop_psi,
    )?;
    let fluid = select_fluid(tr)?;

    let input = PipeSizingInput {
        mass_flow_lb_per_h: flow::mw_to_mass_flow_lb_per_h(mw, delta_t),
        density_lb_per_ft3: fluid.density_lb_per_ft3,
        viscosity_lb_per_ft_s: fluid.viscosity_lb_per_ft_s,
        max_velocity_ft_per_s: max_velocity,
        max_pressure_drop_psi: max_dp,
    };
    match piping::size_pipe(&input, piping::schedule_40()) {
        Ok(result) => print_sizing_result(tr, cfg, &result),
        Err(e) => println!("{e}"),
    }

    run_chiller_recommendation(tr, cfg, mw);
    Ok(())
}

/// 레이아웃 기반 분석 메뉴를 처리한다.
pub fn handle_layout_analysis(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("\n{}", tr.t(keys::LAYOUT_HEADING));
    let layout = loop {
        let s = read_line(tr.t(keys::PROMPT_LAYOUT))?;
        match layout::parse_layout(&s) {
            Ok(l) => break l,
            Err(e) => println!("{e}"),
        }
    };
    let include_floors = read_yes_no(tr.t(keys::PROMPT_INCLUDE_FLOORS), false)?;
    let same_mw = read_yes_no(tr.t(keys::PROMPT_SAME_MW), true)?;

    let hall_loads = if same_mw {
        let mw_per_hall = read_positive_f64(tr, tr.t(keys::PROMPT_MW_PER_HALL))?;
        layout::uniform_hall_loads(&layout, include_floors, mw_per_hall)
    } else {
        read_individual_hall_loads(tr, &layout, include_floors)?
    };

    let fan_heat = read_f64_default(tr, tr.t(keys::PROMPT_FAN_HEAT), cfg.design.fan_heat_percent)?;
    let delta_t = read_f64_default(tr, tr.t(keys::PROMPT_DELTA_T), cfg.design.delta_t_f)?;
    let max_velocity = read_f64_default(
        tr,
        tr.t(keys::PROMPT_MAX_VELOCITY),
        cfg.design.max_velocity_ft_per_s,
    )?;
    let max_dp = read_f64_default(
        tr,
        tr.t(keys::PROMPT_MAX_DP),
        cfg.design.max_pressure_drop_psi,
    )?;
    let fluid = select_fluid(tr)?;

    let total_it_mw: f64 = hall_loads.iter().map(|h| h.it_load_mw).sum();
    let total_cooling_mw = flow::cooling_load_mw(total_it_mw, fan_heat);

    println!("\n{}", tr.t(keys::LAYOUT_SUMMARY_HEADING));
    println!(
        "{}x{}x{} ({})",
        layout.columns,
        layout.rows,
        layout.floors,
        layout.total_halls()
    );
    println!("{}: {:.1} MW", tr.t(keys::LAYOUT_TOTAL_IT), total_it_mw);
    println!(
        "{}: {:.1} MW",
        tr.t(keys::LAYOUT_TOTAL_COOLING),
        total_cooling_mw
    );

    let main_input = PipeSizingInput {
        mass_flow_lb_per_h: flow::mw_to_mass_flow_lb_per_h(total_cooling_mw, delta_t),
        density_lb_per_ft3: fluid.density_lb_per_ft3,
        viscosity_lb_per_ft_s: fluid.viscosity_lb_per_ft_s,
        max_velocity_ft_per_s: max_velocity,
        max_pressure_drop_psi: max_dp,
    };
    match piping::size_pipe(&main_input, piping::schedule_40()) {
        Ok(result) => print_sizing_result(tr, cfg, &result),
        Err(e) => println!("{e}"),
    }

    // 기둥별 공유 라이저 사이징
    println!("\n{}", tr.t(keys::RISER_HEADING));
    println!("{}", tr.t(keys::RISER_TABLE_HEADER));
    let mut warnings: Vec<String> = Vec::new();
    for agg in layout::column_aggregates(&hall_loads) {
        let col_cooling_mw = flow::cooling_load_mw(agg.total_mw, fan_heat);
        let col_input = PipeSizingInput {
            mass_flow_lb_per_h: flow::mw_to_mass_flow_lb_per_h(col_cooling_mw, delta_t),
            density_lb_per_ft3: fluid.density_lb_per_ft3,
            viscosity_lb_per_ft_s: fluid.viscosity_lb_per_ft_s,
            max_velocity_ft_per_s: max_velocity,
            max_pressure_drop_psi: max_dp,
        };
        match piping::size_pipe(&col_input, piping::schedule_40()) {
            Ok(result) => {
                let size_label = match &result.selection {
                    PipeSelection::Standard { nominal, .. } => (*nominal).to_string(),
                    PipeSelection::Unresolved { inner_diameter_in } => {
                        format!("({inner_diameter_in:.1} in)")
                    }
                };
                let (vel, vel_unit) = display_velocity(cfg, result.velocity_ft_per_s);
                let (dp, dp_unit) = display_pressure(cfg, result.pressure_drop_psi);
                println!(
                    "{:<8} {:<8.1} {:<9.1} {:<10} {:<6.1} {:<6} {:.2} {}",
                    agg.column, agg.total_mw, col_cooling_mw, size_label, vel, vel_unit, dp, dp_unit
                );
                if result.velocity_ft_per_s > VELOCITY_WARN_FT_PER_S {
                    warnings.push(format!(
                        "{}: {:.1} ft/s",
                        agg.column, result.velocity_ft_per_s
                    ));
                }
            }
            Err(e) => println!("{:<8} {e}", agg.column),
        }
    }
    if !warnings.is_empty() {
        println!("\n{}", tr.t(keys::WARN_HIGH_VELOCITY));
        for w in &warnings {
            println!("  {w}");
        }
    }

    run_chiller_recommendation(tr, cfg, total_cooling_mw);
    Ok(())
}

/// 칠러 구성 탐색 메뉴를 처리한다.
pub fn handle_chiller_sizing(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("\n{}", tr.t(keys::CHILLER_HEADING));
    let total_mw = read_positive_f64(tr, tr.t(keys::PROMPT_COOLING_LOAD))?;

    println!("{}", tr.t(keys::PROMPT_REDUNDANCY_MODEL));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let (redundancy_model, redundancy_percent) = match sel.trim() {
        "2" => (RedundancyModel::NPlus2, 0.0),
        "3" => {
            let pct = read_f64_default(
                tr,
                tr.t(keys::PROMPT_REDUNDANCY_PERCENT),
                cfg.design.redundancy_percent,
            )?;
            (RedundancyModel::NPlusPercent, pct)
        }
        _ => (RedundancyModel::NPlus1, 0.0),
    };

    println!("{}", tr.t(keys::PROMPT_STRATEGY));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let strategy = match sel.trim() {
        "1" => ChillerStrategy::Modular,
        "2" => ChillerStrategy::Central,
        _ => ChillerStrategy::Balanced,
    };

    let max_chillers = read_u32_default(
        tr,
        tr.t(keys::PROMPT_MAX_CHILLERS),
        cfg.design.max_chillers,
    )?;
    let electricity_rate = read_f64_default(
        tr,
        tr.t(keys::PROMPT_ELECTRICITY_RATE),
        cfg.design.electricity_rate_per_kwh,
    )?;

    let input = ChillerSizingInput {
        total_mw,
        redundancy_model,
        redundancy_percent,
        strategy,
        max_chillers,
        min_loading_percent: cfg.design.min_loading_percent,
        max_loading_percent: cfg.design.max_loading_percent,
        electricity_rate_per_kwh: electricity_rate,
        annual_hours: cfg.design.annual_hours,
    };
    match chiller::search_configurations(&input, chiller::standard_catalog()) {
        Ok(options) if options.is_empty() => println!("{}", tr.t(keys::CHILLER_NO_RESULT)),
        Ok(options) => {
            print_chiller_table(tr, &options, 5);
            print_chiller_details(tr, &options[0]);
        }
        Err(e) => println!("{e}"),
    }
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("\n{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS_LINE1));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS_LINE2));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(kind) = map_quantity(n) {
                break kind;
            }
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    match conversion::convert(kind, value, from_unit.trim(), to_unit.trim()) {
        Ok(result) => println!(
            "{}: {result} {}",
            tr.t(keys::UNIT_CONVERSION_RESULT),
            to_unit.trim()
        ),
        Err(e) => println!("{e}"),
    }
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Temperature),
        2 => Some(QuantityKind::TemperatureDifference),
        3 => Some(QuantityKind::Pressure),
        4 => Some(QuantityKind::Length),
        5 => Some(QuantityKind::Velocity),
        6 => Some(QuantityKind::Density),
        7 => Some(QuantityKind::Viscosity),
        8 => Some(QuantityKind::MassFlow),
        9 => Some(QuantityKind::VolumeFlow),
        10 => Some(QuantityKind::CoolingLoad),
        _ => None,
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("\n{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{}: {:?}",
        tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM),
        cfg.unit_system
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => {}
        "1" => cfg.apply_unit_system(UnitSystem::Imperial),
        "2" => cfg.apply_unit_system(UnitSystem::SI),
        _ => println!("{}", tr.t(keys::SETTINGS_INVALID)),
    }
    let lang = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
    if !lang.trim().is_empty() {
        cfg.language = lang.trim().to_string();
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 칠러 추천을 기본 정책(N+1, 균형형)으로 실행해 상위 구성을 출력한다.
pub fn run_chiller_recommendation(tr: &Translator, cfg: &Config, cooling_mw: f64) {
    println!("\n{}", tr.t(keys::CHILLER_RECOMMEND_HEADING));
    let input = ChillerSizingInput {
        total_mw: cooling_mw,
        redundancy_model: RedundancyModel::NPlus1,
        redundancy_percent: cfg.design.redundancy_percent,
        strategy: ChillerStrategy::Balanced,
        max_chillers: cfg.design.max_chillers,
        min_loading_percent: cfg.design.min_loading_percent,
        max_loading_percent: cfg.design.max_loading_percent,
        electricity_rate_per_kwh: cfg.design.electricity_rate_per_kwh,
        annual_hours: cfg.design.annual_hours,
    };
    match chiller::search_configurations(&input, chiller::standard_catalog()) {
        Ok(options) if options.is_empty() => println!("{}", tr.t(keys::CHILLER_NO_RESULT)),
        Ok(options) => print_chiller_table(tr, &options, 3),
        Err(e) => println!("{e}"),
    }
}

fn print_chiller_table(tr: &Translator, options: &[ChillerOption], limit: usize) {
    println!("{}", tr.t(keys::CHILLER_TABLE_HEADER));
    for (i, opt) in options.iter().take(limit).enumerate() {
        println!(
            "{:<3} {:<7.2} {:<7.0} {:<6} {:<6} {:<6} {:<9.1} ${:<12.0} ${:<10.0}",
            i + 1,
            opt.size_mw,
            opt.size_tons,
            opt.total_chillers,
            opt.operating_chillers,
            opt.redundant_chillers,
            opt.loading_percent,
            opt.ten_year_tco,
            opt.tco_per_mw
        );
    }
}

fn print_chiller_details(tr: &Translator, best: &ChillerOption) {
    println!("\n{}", tr.t(keys::CHILLER_BEST_HEADING));
    println!(
        "{} x {:.2} MW ({:.0} ton) = {:.1} MW ({} + {})",
        best.total_chillers,
        best.size_mw,
        best.size_tons,
        best.total_capacity_mw,
        best.operating_chillers,
        best.redundant_chillers
    );
    println!(
        "COP {:.1}, {:.2} kW/ton, loading {:.1}%, redundancy {:.1}%",
        best.cop, best.kw_per_ton, best.loading_percent, best.redundancy_percent
    );
    println!(
        "Install ${:.0}, Energy ${:.0}/yr ({:.0} kWh), Maint ${:.0}/yr",
        best.installation_cost, best.annual_energy_cost, best.annual_kwh, best.annual_maintenance_cost
    );
    println!(
        "10-yr TCO ${:.0} (${:.0}/MW)",
        best.ten_year_tco, best.tco_per_mw
    );
}

/// 배관 사이징 결과를 설정된 단위 시스템으로 출력한다.
pub fn print_sizing_result(tr: &Translator, cfg: &Config, result: &PipeSizingResult) {
    println!("\n{}", tr.t(keys::RESULT_PIPE_HEADING));
    match &result.selection {
        PipeSelection::Standard {
            nominal,
            inner_diameter_in,
        } => {
            println!("{}: {}", tr.t(keys::RESULT_STANDARD_SIZE), nominal);
            let (id, id_unit) = display_diameter(cfg, *inner_diameter_in);
            println!("{}: {:.1} {}", tr.t(keys::RESULT_ACTUAL_ID), id, id_unit);
        }
        PipeSelection::Unresolved { inner_diameter_in } => {
            let (id, id_unit) = display_diameter(cfg, *inner_diameter_in);
            println!("{}: {:.1} {}", tr.t(keys::RESULT_RAW_ID), id, id_unit);
            println!("{}", tr.t(keys::RESULT_UNRESOLVED_NOTE));
        }
    }
    let (q, q_unit) = display_flow(cfg, result.flow_gpm);
    println!("{}: {:.0} {}", tr.t(keys::RESULT_FLOW), q, q_unit);
    let (v, v_unit) = display_velocity(cfg, result.velocity_ft_per_s);
    println!("{}: {:.1} {}", tr.t(keys::RESULT_VELOCITY), v, v_unit);
    println!(
        "{}: {:.2e}",
        tr.t(keys::RESULT_REYNOLDS),
        result.reynolds_number
    );
    println!(
        "{}: {:.4}",
        tr.t(keys::RESULT_FRICTION),
        result.friction_factor
    );
    let (dp, dp_unit) = display_pressure(cfg, result.pressure_drop_psi);
    println!("{}: {:.2} {}", tr.t(keys::RESULT_DP), dp, dp_unit);
    if result.velocity_ft_per_s > VELOCITY_WARN_FT_PER_S {
        println!("{}", tr.t(keys::WARN_HIGH_VELOCITY));
    }
}

fn display_velocity(cfg: &Config, velocity_ft_per_s: f64) -> (f64, &'static str) {
    let unit = cfg.default_units.velocity;
    (
        convert_velocity(velocity_ft_per_s, VelocityUnit::FootPerSecond, unit),
        velocity_unit_label(unit),
    )
}

fn display_pressure(cfg: &Config, pressure_psi: f64) -> (f64, &'static str) {
    let unit = cfg.default_units.pressure;
    (
        convert_pressure(pressure_psi, PressureUnit::Psi, unit),
        pressure_unit_label(unit),
    )
}

fn display_diameter(cfg: &Config, diameter_in: f64) -> (f64, &'static str) {
    let unit = cfg.default_units.length;
    (
        convert_length(diameter_in, LengthUnit::Inch, unit),
        length_unit_label(unit),
    )
}

fn display_flow(cfg: &Config, flow_gpm: f64) -> (f64, &'static str) {
    let unit = cfg.default_units.volume_flow;
    (
        convert_volume_flow(flow_gpm, VolumeFlowUnit::GallonPerMinute, unit),
        volume_flow_unit_label(unit),
    )
}

fn velocity_unit_label(unit: VelocityUnit) -> &'static str {
    match unit {
        VelocityUnit::FootPerSecond => "ft/s",
        VelocityUnit::MeterPerSecond => "m/s",
    }
}

fn pressure_unit_label(unit: PressureUnit) -> &'static str {
    match unit {
        PressureUnit::Psi => "psi",
        PressureUnit::Psf => "psf",
        PressureUnit::Bar => "bar",
        PressureUnit::KiloPascal => "kPa",
        PressureUnit::Pascal => "Pa",
    }
}

fn length_unit_label(unit: LengthUnit) -> &'static str {
    match unit {
        LengthUnit::Foot => "ft",
        LengthUnit::Inch => "in",
        LengthUnit::Meter => "m",
        LengthUnit::Millimeter => "mm",
    }
}

fn volume_flow_unit_label(unit: VolumeFlowUnit) -> &'static str {
    match unit {
        VolumeFlowUnit::GallonPerMinute => "GPM",
        VolumeFlowUnit::CubicFootPerSecond => "ft3/s",
        VolumeFlowUnit::CubicMeterPerHour => "m3/h",
        VolumeFlowUnit::LiterPerSecond => "L/s",
    }
}

/// 유체 목록을 표시하고 선택을 받는다. 기본값은 1번(water)이다.
fn select_fluid(tr: &Translator) -> Result<&'static FluidData, AppError> {
    println!("\n{}", tr.t(keys::FLUID_HEADING));
    let fluids = fluid_db::standard_fluids();
    for (i, fluid) in fluids.iter().enumerate() {
        println!(
            "{}) {} (ρ={} lb/ft3, μ={:.2e} lb/ft·s)",
            i + 1,
            fluid.name,
            fluid.density_lb_per_ft3,
            fluid.viscosity_lb_per_ft_s
        );
    }
    loop {
        let sel = read_line(&format!("{} [1]: ", tr.t(keys::PROMPT_FLUID_SELECT)))?;
        let trimmed = sel.trim();
        if trimmed.is_empty() {
            return Ok(&fluids[0]);
        }
        if let Ok(n) = trimmed.parse::<usize>() {
            if n >= 1 && n <= fluids.len() {
                return Ok(&fluids[n - 1]);
            }
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

fn read_individual_hall_loads(
    tr: &Translator,
    layout: &Layout,
    include_floors: bool,
) -> Result<Vec<HallLoad>, AppError> {
    let mut loads = Vec::new();
    for hall in layout::make_hall_names(layout, include_floors) {
        let mw = loop {
            let value = read_f64(tr, &format!("{hall} [MW]: "))?;
            if value >= 0.0 {
                break value;
            }
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
        };
        loads.push(HallLoad {
            hall,
            it_load_mw: mw,
        });
    }
    Ok(loads)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf).map_err(AppError::Io)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_positive_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let v = read_f64(tr, prompt)?;
        if v > 0.0 {
            return Ok(v);
        }
        println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
    }
}

fn read_f64_default(tr: &Translator, label: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{label} [{default}]: "))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u32_default(tr: &Translator, label: &str, default: u32) -> Result<u32, AppError> {
    loop {
        let s = read_line(&format!("{label} [{default}]: "))?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_yes_no(prompt: &str, default_yes: bool) -> Result<bool, AppError> {
    let s = read_line(prompt)?;
    let answer = s.trim().to_lowercase();
    if answer.is_empty() {
        return Ok(default_yes);
    }
    Ok(answer.starts_with('y'))
}
