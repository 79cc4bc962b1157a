//=========================================================================
// Scene Description
//=========================================================================
//
// Declarative static content handed to the renderer: ground, lights,
// props. Nothing here takes part in movement; the ground clamp in the
// camera rig is the only floor and props are decorative.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec3;

//=== Materials ===========================================================

/// 24-bit RGB color (`0xRRGGBB`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Self = Self(0xffffff);
    pub const GRASS: Self = Self(0x224422);
    pub const STONE: Self = Self(0x888888);
    pub const NEON: Self = Self(0x00ff00);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Unlit flat color.
    Basic { color: Color },

    /// Lit surface with optional glow.
    Phong {
        color: Color,
        emissive: Option<Color>,
        specular: Option<Color>,
        shininess: f32,
        flat_shading: bool,
    },
}

impl Material {
    pub fn phong(color: Color) -> Self {
        Self::Phong {
            color,
            emissive: None,
            specular: None,
            shininess: 30.0,
            flat_shading: false,
        }
    }
}

//=== Geometry ============================================================

/// Horizontal ground plane centred on the origin at y = 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ground {
    pub width: f32,
    pub depth: f32,
    pub material: Material,
    pub receive_shadow: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropRole {
    /// Raised slab; visual only, not walkable.
    Platform,
    Ornament,
}

/// Axis-aligned box mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prop {
    pub role: PropRole,
    pub size: Vec3,
    pub position: Vec3,
    pub material: Material,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Prop {
    fn platform(position: Vec3) -> Self {
        Self {
            role: PropRole::Platform,
            size: Vec3::new(10.0, 1.0, 10.0),
            position,
            material: Material::Basic { color: Color::STONE },
            cast_shadow: false,
            receive_shadow: false,
        }
    }
}

//=== Lighting ============================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowSettings {
    pub map_size: u32,
    pub near: f32,
    pub far: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Ambient {
        color: Color,
        intensity: f32,
    },
    Point {
        color: Color,
        intensity: f32,
        range: f32,
        position: Vec3,
        shadow: Option<ShadowSettings>,
    },
}

//=== Scene ===============================================================

/// Static scene plus the attachment point for the controlled camera.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub ground: Ground,
    pub lights: Vec<Light>,
    pub props: Vec<Prop>,
    camera_attached: bool,
}

impl Scene {
    /// Ground only, no lights or props.
    pub fn empty() -> Self {
        Self {
            ground: Ground {
                width: 500.0,
                depth: 500.0,
                material: Material::phong(Color::GRASS),
                receive_shadow: true,
            },
            lights: Vec::new(),
            props: Vec::new(),
            camera_attached: false,
        }
    }

    /// Grass field with two slabs, a glowing cube and a shadowed key light.
    pub fn showcase() -> Self {
        let key_light_at = Vec3::new(10.0, 10.0, 5.0);
        let mut scene = Self::empty();

        scene.lights = vec![
            Light::Ambient {
                color: Color::WHITE,
                intensity: 0.1,
            },
            Light::Point {
                color: Color::WHITE,
                intensity: 12.0,
                range: 100.0,
                position: key_light_at,
                shadow: Some(ShadowSettings {
                    map_size: 512,
                    near: 0.5,
                    far: 500.0,
                }),
            },
            Light::Point {
                color: Color::NEON,
                intensity: 1.0,
                range: 25.0,
                position: key_light_at,
                shadow: None,
            },
        ];

        scene.props = vec![
            Prop::platform(Vec3::new(0.0, 5.0, 0.0)),
            Prop::platform(Vec3::new(110.0, 20.0, 10.0)),
            Prop {
                role: PropRole::Ornament,
                size: Vec3::ONE,
                position: key_light_at,
                material: Material::Phong {
                    color: Color::NEON,
                    emissive: Some(Color::NEON),
                    specular: Some(Color(0x009900)),
                    shininess: 100.0,
                    flat_shading: true,
                },
                cast_shadow: true,
                receive_shadow: true,
            },
        ];

        scene
    }

    //--- Camera Attachment ------------------------------------------------

    pub fn attach_camera(&mut self) {
        self.camera_attached = true;
    }

    pub fn detach_camera(&mut self) {
        self.camera_attached = false;
    }

    pub fn has_camera(&self) -> bool {
        self.camera_attached
    }

    //--- Queries ----------------------------------------------------------

    pub fn platforms(&self) -> impl Iterator<Item = &Prop> {
        self.props.iter().filter(|p| p.role == PropRole::Platform)
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::showcase()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
