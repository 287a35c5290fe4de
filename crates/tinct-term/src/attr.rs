// SPDX-License-Identifier: MIT
//
// Text attributes such as bold, dim and italic.
//
// Each attribute maps to one SGR "on" parameter and one SGR "off"
// parameter. Bold and dim share their off code (22), which is why a dim
// span nested inside a bold one turns bold off too; the `Style` painter
// re-opens outer layers after every inner close to compensate.

bitflags::bitflags! {
    /// Text attributes stored as a compact bitfield.
    ///
    /// These map directly to SGR (Select Graphic Rendition) parameters
    /// in the ANSI escape sequence standard. Combine with bitwise OR:
    ///
    /// ```
    /// use tinct_term::attr::Attr;
    ///
    /// let style = Attr::BOLD | Attr::ITALIC;
    /// assert!(style.contains(Attr::BOLD));
    /// assert!(style.contains(Attr::ITALIC));
    /// assert!(!style.contains(Attr::DIM));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Attr: u8 {
        /// SGR 1: increased intensity.
        const BOLD          = 1 << 0;
        /// SGR 2: decreased intensity (faint).
        const DIM           = 1 << 1;
        /// SGR 3: italic or oblique.
        const ITALIC        = 1 << 2;
        /// SGR 4: straight underline.
        const UNDERLINE     = 1 << 3;
        /// SGR 7: swap foreground and background.
        const INVERSE       = 1 << 4;
        /// SGR 8: invisible text (not widely supported).
        const HIDDEN        = 1 << 5;
        /// SGR 9: crossed-out text.
        const STRIKETHROUGH = 1 << 6;
    }
}

/// On/off SGR parameters for each single attribute.
const SGR_CODES: [(Attr, u8, u8); 7] = [
    (Attr::BOLD, 1, 22),
    (Attr::DIM, 2, 22),
    (Attr::ITALIC, 3, 23),
    (Attr::UNDERLINE, 4, 24),
    (Attr::INVERSE, 7, 27),
    (Attr::HIDDEN, 8, 28),
    (Attr::STRIKETHROUGH, 9, 29),
];

impl Attr {
    /// SGR parameter that turns this single attribute on.
    ///
    /// Returns `None` for an empty set or a combination of several flags.
    #[must_use]
    pub fn sgr_on(self) -> Option<u8> {
        SGR_CODES
            .iter()
            .find(|(attr, _, _)| *attr == self)
            .map(|&(_, on, _)| on)
    }

    /// SGR parameter that turns this single attribute off.
    #[must_use]
    pub fn sgr_off(self) -> Option<u8> {
        SGR_CODES
            .iter()
            .find(|(attr, _, _)| *attr == self)
            .map(|&(_, _, off)| off)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
