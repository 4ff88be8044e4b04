//! 焦点管理

/// 表单字段（按 Tab 顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    Language,
    #[default]
    Isp,
    /// 仅移动运营商显示
    Variant,
    Username,
    Password,
    Name,
    Role,
    /// 仅在运营商提供修改密码方式时显示
    ChangePassword,
    Submit,
    Log,
}

impl FormField {
    const ORDER: [FormField; 10] = [
        FormField::Language,
        FormField::Isp,
        FormField::Variant,
        FormField::Username,
        FormField::Password,
        FormField::Name,
        FormField::Role,
        FormField::ChangePassword,
        FormField::Submit,
        FormField::Log,
    ];

    /// 是否是文本输入框
    pub fn is_text_input(self) -> bool {
        matches!(
            self,
            FormField::Username | FormField::Password | FormField::Name
        )
    }

    /// 是否是 ◀ ▶ 选择器
    pub fn is_selector(self) -> bool {
        matches!(
            self,
            FormField::Language | FormField::Isp | FormField::Variant | FormField::Role
        )
    }

    /// 下一个可见字段
    pub fn next(self, visible: impl Fn(FormField) -> bool) -> FormField {
        self.step(1, visible)
    }

    /// 上一个可见字段
    pub fn prev(self, visible: impl Fn(FormField) -> bool) -> FormField {
        self.step(Self::ORDER.len() - 1, visible)
    }

    fn step(self, offset: usize, visible: impl Fn(FormField) -> bool) -> FormField {
        let len = Self::ORDER.len();
        let start = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        (1..=len)
            .map(|i| Self::ORDER[(start + i * offset) % len])
            .find(|f| visible(*f))
            .unwrap_or(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_hidden_fields() {
        let visible = |f: FormField| f != FormField::Variant;
        assert_eq!(FormField::Isp.next(visible), FormField::Username);
        assert_eq!(FormField::Username.prev(visible), FormField::Isp);
    }

    #[test]
    fn wraps_around() {
        let all = |_: FormField| true;
        assert_eq!(FormField::Log.next(all), FormField::Language);
        assert_eq!(FormField::Language.prev(all), FormField::Log);
    }
}
