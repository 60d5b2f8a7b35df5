//! String-tagged vocabularies shared by every node property group
//!
//! The host tool grows its vocabulary independently of this crate, so every
//! enumeration here is open: known tags map to named variants and anything
//! else is carried verbatim in `Other` and written back unchanged.

/// Declare an open, string-tagged enumeration.
///
/// Each known variant is paired with its wire tag. The generated type
/// serializes as a bare string and never fails to deserialize.
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $tag:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Tag not known to this version; preserved verbatim
            Other(String),
        }

        impl $name {
            /// Every known variant, in declaration order
            pub const KNOWN: &'static [$name] = &[$( $name::$variant, )+];

            /// The wire tag for this value
            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $tag, )+
                    Self::Other(tag) => tag.as_str(),
                }
            }

            /// Whether this value is one of the known variants
            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Other(_))
            }
        }

        impl From<&str> for $name {
            fn from(tag: &str) -> Self {
                match tag {
                    $( $tag => Self::$variant, )+
                    other => Self::Other(other.to_string()),
                }
            }
        }

        impl From<String> for $name {
            fn from(tag: String) -> Self {
                match Self::from(tag.as_str()) {
                    Self::Other(_) => Self::Other(tag),
                    known => known,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let tag = String::deserialize(deserializer)?;
                Ok(Self::from(tag))
            }
        }
    };
}

// =============================================================================
// Node Kinds
// =============================================================================

open_enum! {
    /// Kind of a design node
    pub enum NodeKind {
        Frame => "FRAME",
        Group => "GROUP",
        Section => "SECTION",
        Rectangle => "RECTANGLE",
        Ellipse => "ELLIPSE",
        Polygon => "POLYGON",
        Star => "STAR",
        Line => "LINE",
        Vector => "VECTOR",
        Text => "TEXT",
        BooleanOperation => "BOOLEAN_OPERATION",
        Component => "COMPONENT",
        ComponentSet => "COMPONENT_SET",
        Instance => "INSTANCE",
        Slice => "SLICE",
        Sticky => "STICKY",
        ShapeWithText => "SHAPE_WITH_TEXT",
        Connector => "CONNECTOR",
        Table => "TABLE",
        Widget => "WIDGET",
        Embed => "EMBED",
    }
}

impl NodeKind {
    /// Components and component sets define what instances refer to, so they
    /// must be created before anything else in an import batch.
    pub fn is_definitional(&self) -> bool {
        matches!(self, NodeKind::Component | NodeKind::ComponentSet)
    }

    /// Kinds that may own children on the host
    pub fn is_container_kind(&self) -> bool {
        matches!(
            self,
            NodeKind::Frame
                | NodeKind::Group
                | NodeKind::Section
                | NodeKind::BooleanOperation
                | NodeKind::Component
                | NodeKind::ComponentSet
                | NodeKind::Instance
                | NodeKind::Table
        )
    }

    /// Primitive geometric shapes
    pub fn is_shape(&self) -> bool {
        matches!(
            self,
            NodeKind::Rectangle
                | NodeKind::Ellipse
                | NodeKind::Polygon
                | NodeKind::Star
                | NodeKind::Line
                | NodeKind::Vector
        )
    }
}

/// Frames are the default container on the host
impl Default for NodeKind {
    fn default() -> Self {
        NodeKind::Frame
    }
}

// =============================================================================
// Paint & Compositing
// =============================================================================

open_enum! {
    /// Layer blend mode
    pub enum BlendMode {
        PassThrough => "PASS_THROUGH",
        Normal => "NORMAL",
        Darken => "DARKEN",
        Multiply => "MULTIPLY",
        LinearBurn => "LINEAR_BURN",
        ColorBurn => "COLOR_BURN",
        Lighten => "LIGHTEN",
        Screen => "SCREEN",
        LinearDodge => "LINEAR_DODGE",
        ColorDodge => "COLOR_DODGE",
        Overlay => "OVERLAY",
        SoftLight => "SOFT_LIGHT",
        HardLight => "HARD_LIGHT",
        Difference => "DIFFERENCE",
        Exclusion => "EXCLUSION",
        Hue => "HUE",
        Saturation => "SATURATION",
        Color => "COLOR",
        Luminosity => "LUMINOSITY",
    }
}

open_enum! {
    /// Kind of a fill or stroke paint
    pub enum PaintKind {
        Solid => "SOLID",
        GradientLinear => "GRADIENT_LINEAR",
        GradientRadial => "GRADIENT_RADIAL",
        GradientAngular => "GRADIENT_ANGULAR",
        GradientDiamond => "GRADIENT_DIAMOND",
        Image => "IMAGE",
        Video => "VIDEO",
    }
}

open_enum! {
    /// How an image paint is fitted to its node
    pub enum ScaleMode {
        Fill => "FILL",
        Fit => "FIT",
        Crop => "CROP",
        Tile => "TILE",
    }
}

open_enum! {
    /// Kind of a post-paint effect
    pub enum EffectKind {
        DropShadow => "DROP_SHADOW",
        InnerShadow => "INNER_SHADOW",
        LayerBlur => "LAYER_BLUR",
        BackgroundBlur => "BACKGROUND_BLUR",
    }
}

// =============================================================================
// Strokes
// =============================================================================

open_enum! {
    /// Where a stroke sits relative to the node outline
    pub enum StrokeAlign {
        Center => "CENTER",
        Inside => "INSIDE",
        Outside => "OUTSIDE",
    }
}

open_enum! {
    /// Stroke end decoration
    pub enum StrokeCap {
        None => "NONE",
        Round => "ROUND",
        Square => "SQUARE",
        ArrowLines => "ARROW_LINES",
        ArrowEquilateral => "ARROW_EQUILATERAL",
        TriangleFilled => "TRIANGLE_FILLED",
        DiamondFilled => "DIAMOND_FILLED",
        CircleFilled => "CIRCLE_FILLED",
    }
}

open_enum! {
    /// Stroke corner join
    pub enum StrokeJoin {
        Miter => "MITER",
        Bevel => "BEVEL",
        Round => "ROUND",
    }
}

// =============================================================================
// Constraints & Auto-layout
// =============================================================================

open_enum! {
    /// Anchor mode on one axis
    pub enum ConstraintType {
        Min => "MIN",
        Center => "CENTER",
        Max => "MAX",
        Stretch => "STRETCH",
        Scale => "SCALE",
    }
}

open_enum! {
    /// Auto-layout direction
    pub enum LayoutMode {
        None => "NONE",
        Horizontal => "HORIZONTAL",
        Vertical => "VERTICAL",
        Grid => "GRID",
    }
}

open_enum! {
    /// Sizing along an auto-layout axis
    pub enum AxisSizingMode {
        Fixed => "FIXED",
        Auto => "AUTO",
    }
}

open_enum! {
    /// Sizing of a node inside its auto-layout parent
    pub enum LayoutSizing {
        Fixed => "FIXED",
        Hug => "HUG",
        Fill => "FILL",
    }
}

open_enum! {
    /// Distribution along the primary axis
    pub enum PrimaryAxisAlign {
        Min => "MIN",
        Center => "CENTER",
        Max => "MAX",
        SpaceBetween => "SPACE_BETWEEN",
    }
}

open_enum! {
    /// Alignment along the counter axis
    pub enum CounterAxisAlign {
        Min => "MIN",
        Center => "CENTER",
        Max => "MAX",
        Baseline => "BASELINE",
    }
}

open_enum! {
    /// Child alignment override inside auto-layout
    pub enum LayoutAlign {
        Inherit => "INHERIT",
        Stretch => "STRETCH",
        Min => "MIN",
        Center => "CENTER",
        Max => "MAX",
    }
}

open_enum! {
    /// Whether a child participates in auto-layout flow
    pub enum LayoutPositioning {
        Auto => "AUTO",
        Absolute => "ABSOLUTE",
    }
}

open_enum! {
    /// Auto-layout wrapping
    pub enum LayoutWrap {
        NoWrap => "NO_WRAP",
        Wrap => "WRAP",
    }
}

// =============================================================================
// Text
// =============================================================================

open_enum! {
    pub enum TextAlignHorizontal {
        Left => "LEFT",
        Center => "CENTER",
        Right => "RIGHT",
        Justified => "JUSTIFIED",
    }
}

open_enum! {
    pub enum TextAlignVertical {
        Top => "TOP",
        Center => "CENTER",
        Bottom => "BOTTOM",
    }
}

open_enum! {
    /// Case transform applied to characters
    pub enum TextCase {
        Original => "ORIGINAL",
        Upper => "UPPER",
        Lower => "LOWER",
        Title => "TITLE",
        SmallCaps => "SMALL_CAPS",
        SmallCapsForced => "SMALL_CAPS_FORCED",
    }
}

open_enum! {
    pub enum TextDecoration {
        None => "NONE",
        Underline => "UNDERLINE",
        Strikethrough => "STRIKETHROUGH",
    }
}

open_enum! {
    /// How a text box grows with its content
    pub enum TextAutoResize {
        None => "NONE",
        WidthAndHeight => "WIDTH_AND_HEIGHT",
        Height => "HEIGHT",
        Truncate => "TRUNCATE",
    }
}

open_enum! {
    pub enum TextTruncation {
        Disabled => "DISABLED",
        Ending => "ENDING",
    }
}

open_enum! {
    /// Unit of a line height
    pub enum LineHeightUnit {
        Auto => "AUTO",
        Pixels => "PIXELS",
        Percent => "PERCENT",
    }
}

open_enum! {
    /// Unit of a letter spacing
    pub enum SpacingUnit {
        Pixels => "PIXELS",
        Percent => "PERCENT",
    }
}

// =============================================================================
// Vector & Boolean
// =============================================================================

open_enum! {
    /// Fill rule for vector paths and regions
    pub enum WindingRule {
        NonZero => "NONZERO",
        EvenOdd => "EVENODD",
        None => "NONE",
    }
}

open_enum! {
    /// Tangent handle mirroring at a vector vertex
    pub enum HandleMirroring {
        None => "NONE",
        Angle => "ANGLE",
        AngleAndLength => "ANGLE_AND_LENGTH",
    }
}

open_enum! {
    /// Operator of a boolean-operation node
    pub enum BooleanOperator {
        Union => "UNION",
        Intersect => "INTERSECT",
        Subtract => "SUBTRACT",
        Exclude => "EXCLUDE",
    }
}

// =============================================================================
// Export, Guides, Grids, Components
// =============================================================================

open_enum! {
    pub enum ExportFormat {
        Png => "PNG",
        Jpg => "JPG",
        Svg => "SVG",
        Pdf => "PDF",
    }
}

open_enum! {
    pub enum ExportConstraintType {
        Scale => "SCALE",
        Width => "WIDTH",
        Height => "HEIGHT",
    }
}

open_enum! {
    pub enum GuideAxis {
        X => "X",
        Y => "Y",
    }
}

open_enum! {
    pub enum LayoutGridPattern {
        Columns => "COLUMNS",
        Rows => "ROWS",
        Grid => "GRID",
    }
}

open_enum! {
    pub enum LayoutGridAlignment {
        Min => "MIN",
        Max => "MAX",
        Stretch => "STRETCH",
        Center => "CENTER",
    }
}

open_enum! {
    /// Type of a component property
    pub enum ComponentPropertyType {
        Boolean => "BOOLEAN",
        Text => "TEXT",
        InstanceSwap => "INSTANCE_SWAP",
        Variant => "VARIANT",
    }
}
