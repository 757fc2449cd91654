//! # 同步控制器实现
//!
//! ## 状态机
//! - `Single`: 一个规范数值 Q
//! - `Pair`:   两个规范数值 A、B，派生 D = A − B
//!
//! 波长与能量不是线性关系，差值没有物理意义，
//! 因此差值模式下波长的 A/B 字段禁用，只显示 D。
//!
//! ## 依赖关系
//! - 使用 `controller/state.rs`, `controller/precision.rs`
//! - 使用 `conversion/`, `format/`, `color.rs`
//! - 被 `commands/` 使用

use super::state::{ControllerState, Fields, PairState, Update};
use super::Precision;
use crate::color::{wavelength_to_rgb, Rgb};
use crate::conversion::{from_canonical, to_canonical};
use crate::error::{EconvError, Result};
use crate::format::{format_edit, parse_input, parse_number, ParsedInput, NO_VALUE};
use crate::models::{Mode, Side, Unit};

use log::{debug, trace};

/// 单位换算控件的控制器
#[derive(Debug, Clone)]
pub struct Controller {
    state: ControllerState,
    fields: Fields,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(Precision::default())
    }
}

impl Controller {
    /// 创建控制器，以 1 Hartree 作为初始值并填充全部字段
    pub fn new(precision: Precision) -> Self {
        let mut state = ControllerState::new(precision);
        state.single = Some(1.0);
        let fields = render(&state);
        Controller { state, fields }
    }

    // ─────────────────────────────────────────────────────────────
    // 事件入口
    // ─────────────────────────────────────────────────────────────

    /// 用户编辑了某个字段
    ///
    /// 无法解析的输入被忽略并返回空的 `Update`；
    /// 只有编辑当前模式下不可编辑的字段才返回错误。
    pub fn on_field_edit(&mut self, unit: Unit, side: Side, raw: &str) -> Result<Update> {
        let mode = self.state.mode;
        if side.mode() != mode {
            return Err(EconvError::ModeMismatch { side, mode });
        }
        if !side.is_editable() {
            return Err(EconvError::FieldNotEditable { unit, side });
        }
        if mode == Mode::Pair && !unit.is_linear() {
            return Err(EconvError::FieldDisabled { unit, side, mode });
        }

        // 渲染层里已经是这段文本，只记录，不产生变更
        self.fields.set(unit, side, raw);

        let mut state = self.state.clone();
        let mut keep = vec![(unit, side)];
        let mut raised = false;

        match parse_input(raw) {
            ParsedInput::Invalid => {
                trace!("ignoring unparseable input {:?} for {} ({})", raw, unit, side);
                return Ok(Update::unchanged(self.state.precision));
            }
            ParsedInput::Empty => {
                debug!("{} ({}) cleared", unit, side);
                state.set_value(side, None);
                state.authored.remove(&side);
            }
            ParsedInput::Number {
                value,
                significant_digits,
            } => {
                if let Some(p) = state.precision.raised_to(significant_digits) {
                    debug!("precision raised {} -> {}", state.precision, p);
                    state.precision = p;
                    raised = true;
                }
                state.set_value(side, Some(to_canonical(value, unit)));

                // 另一侧同一单位的文本同样视为真值
                if let Some(other) = side.other() {
                    if let Some(v) = parse_number(self.fields.text(unit, other)) {
                        state.set_value(other, Some(to_canonical(v, unit)));
                        keep.push((unit, other));
                    }
                }
                state.authored.insert(side, unit);
                debug!("{} ({}) = {} -> {:?} Eh", unit, side, value, state.value(side));
            }
        }

        Ok(self.commit(state, &keep, raised))
    }

    /// 精度输入框被编辑
    pub fn on_precision_edit(&mut self, raw: &str) -> Update {
        match Precision::parse(raw) {
            Some(precision) => self.apply_precision(precision),
            None => {
                trace!("ignoring precision input {:?}", raw);
                Update::unchanged(self.state.precision)
            }
        }
    }

    /// 精度步进 (+1 / -1)
    pub fn on_precision_step(&mut self, delta: i32) -> Update {
        self.apply_precision(self.state.precision.step(delta))
    }

    /// 在单值与差值模式之间切换
    pub fn on_mode_toggle(&mut self) -> Update {
        let mut state = self.state.clone();
        match state.mode {
            Mode::Single => {
                let retained = state.pair.difference();
                if retained.is_none() || retained != state.single {
                    let a = state.single.filter(|v| v.is_finite()).unwrap_or(0.0);
                    state.pair = PairState {
                        a: Some(a),
                        b: Some(0.0),
                    };
                }
            }
            Mode::Pair => {
                state.single = state.pair.difference();
            }
        }
        state.mode = state.mode.toggled();
        state.authored.clear();
        debug!("mode -> {}", state.mode);

        self.commit(state, &[], false)
    }

    // ─────────────────────────────────────────────────────────────
    // 查询
    // ─────────────────────────────────────────────────────────────

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn precision(&self) -> Precision {
        self.state.precision
    }

    /// 字段当前的可编辑文本（无值时为空串）
    pub fn field_text(&self, unit: Unit, side: Side) -> &str {
        self.fields.text(unit, side)
    }

    /// 字段的显示文本（无值时为 `—`）
    pub fn get_display_value(&self, unit: Unit, side: Side) -> String {
        match self.fields.text(unit, side) {
            "" => NO_VALUE.to_string(),
            text => text.to_string(),
        }
    }

    /// 当前模式下可复制的文本：单值模式取该单位的值，差值模式取 D
    pub fn get_copy_text(&self, unit: Unit) -> Option<String> {
        let side = self.result_side();
        match self.fields.text(unit, side) {
            "" => None,
            text => Some(text.to_string()),
        }
    }

    /// 当前结果（单值或 D）在波长下的颜色
    pub fn swatch(&self) -> Option<Rgb> {
        let value = self.state.value(self.result_side())?;
        if !value.is_finite() {
            return None;
        }
        wavelength_to_rgb(from_canonical(value)[Unit::Nanometer])
    }

    fn result_side(&self) -> Side {
        match self.state.mode {
            Mode::Single => Side::Single,
            Mode::Pair => Side::D,
        }
    }

    // ─────────────────────────────────────────────────────────────
    // 内部
    // ─────────────────────────────────────────────────────────────

    /// 以新精度从字段重新取值并重绘
    fn apply_precision(&mut self, precision: Precision) -> Update {
        let mut state = self.state.clone();
        state.precision = precision;
        let mut keep = Vec::new();

        match state.mode {
            Mode::Single => match self.find_source(Side::Single) {
                Some((unit, value)) => {
                    state.single = Some(to_canonical(value, unit));
                    keep.push((unit, Side::Single));
                }
                None => state.single = Some(1.0),
            },
            Mode::Pair => {
                let sources = [
                    (Side::A, self.find_source(Side::A)),
                    (Side::B, self.find_source(Side::B)),
                ];
                if sources.iter().all(|(_, s)| s.is_none()) {
                    state.pair = PairState {
                        a: Some(1.0),
                        b: Some(0.0),
                    };
                }
                for (side, source) in sources {
                    if let Some((unit, value)) = source {
                        state.set_value(side, Some(to_canonical(value, unit)));
                        keep.push((unit, side));
                    }
                }
            }
        }
        debug!("precision -> {}", precision);

        self.commit(state, &keep, false)
    }

    /// 重新取值的来源字段：优先该侧最近键入的字段，其次按 `Unit::ALL` 顺序
    /// 找第一个可解析的字段
    fn find_source(&self, side: Side) -> Option<(Unit, f64)> {
        self.state
            .authored
            .get(&side)
            .copied()
            .into_iter()
            .chain(Unit::ALL)
            .filter(|unit| side == Side::Single || unit.is_linear())
            .find_map(|unit| parse_number(self.fields.text(unit, side)).map(|v| (unit, v)))
    }

    /// 计算目标字段全集，与当前字段比对后一次性提交
    fn commit(&mut self, state: ControllerState, keep: &[(Unit, Side)], raised: bool) -> Update {
        let mut target = render(&state);
        for &(unit, side) in keep {
            target.set(unit, side, self.fields.text(unit, side));
        }

        let changes = self.fields.diff(&target);
        self.fields.apply(&changes);
        self.state = state;

        Update {
            changes,
            precision: self.state.precision,
            precision_raised: raised,
            accepted: true,
        }
    }
}

/// 由状态渲染全部字段；非当前模式的字段清空
fn render(state: &ControllerState) -> Fields {
    let digits = state.precision.digits();
    let mut fields = Fields::default();

    for side in [Side::Single, Side::A, Side::B, Side::D] {
        let active = side.mode() == state.mode;
        let values = state
            .value(side)
            .filter(|v| active && v.is_finite())
            .map(from_canonical);

        for unit in Unit::ALL {
            // 差值模式下波长只有 D
            let disabled = matches!(side, Side::A | Side::B) && !unit.is_linear();
            let text = match values {
                Some(ref values) if !disabled => format_edit(values[unit], digits),
                _ => String::new(),
            };
            fields.set(unit, side, text);
        }
    }
    fields
}
