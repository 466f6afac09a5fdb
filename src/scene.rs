use crate::constants::{CANVAS_CONTAINER_ID, SCENE_LIBRARY_GLOBAL};
use crate::dom;
use crate::events;
use crate::frame::RafScheduler;
use glam::Vec2;
use js_sys::{Array, Float32Array, Function, Object, Reflect};
use rand::Rng;
use site_core::constants::{
    CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z, PARTICLE_COUNT, PARTICLE_OPACITY,
    PARTICLE_SIZE, SPHERE_COLOR, SPHERE_OPACITY, SPHERE_RADIUS, SPHERE_SEGMENTS,
};
use site_core::scene::{particle_buffers, sphere_scale, SceneMotion};
use site_core::{repeat_each_frame, LoopHandle, PointerTracker, SiteError};
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

fn get(target: &JsValue, key: &str) -> Result<JsValue, JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
}

fn set(target: &JsValue, key: &str, value: impl Into<JsValue>) -> Result<(), JsValue> {
    Reflect::set(target, &JsValue::from_str(key), &value.into()).map(drop)
}

fn call(target: &JsValue, method: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
    let f: Function = get(target, method)?.dyn_into()?;
    Reflect::apply(&f, target, &args.iter().collect::<Array>())
}

fn options(pairs: &[(&str, JsValue)]) -> Result<JsValue, JsValue> {
    let obj = Object::new();
    for (key, value) in pairs {
        Reflect::set(&obj, &JsValue::from_str(key), value)?;
    }
    Ok(obj.into())
}

fn aspect(viewport: Vec2) -> f32 {
    viewport.x / viewport.y.max(1.0)
}

/// The library namespace loaded as `globalThis.THREE`.
pub struct Three {
    ns: JsValue,
}

impl Three {
    pub fn load() -> Option<Self> {
        Reflect::get(&js_sys::global(), &JsValue::from_str(SCENE_LIBRARY_GLOBAL))
            .ok()
            .filter(|ns| !ns.is_undefined() && !ns.is_null())
            .map(|ns| Self { ns })
    }

    fn create(&self, class: &str, args: &[JsValue]) -> Result<JsValue, JsValue> {
        let ctor: Function = get(&self.ns, class)?.dyn_into()?;
        Reflect::construct(&ctor, &args.iter().collect::<Array>())
    }
}

struct ThreeScene {
    renderer: JsValue,
    scene: JsValue,
    camera: JsValue,
    particles: JsValue,
    sphere: JsValue,
}

impl ThreeScene {
    fn build<R: Rng>(
        three: &Three,
        container: &web::HtmlElement,
        viewport: Vec2,
        rng: &mut R,
    ) -> Result<Self, JsValue> {
        let scene = three.create("Scene", &[])?;
        let camera = three.create(
            "PerspectiveCamera",
            &[
                CAMERA_FOV_DEG.into(),
                aspect(viewport).into(),
                CAMERA_NEAR.into(),
                CAMERA_FAR.into(),
            ],
        )?;
        set(&get(&camera, "position")?, "z", CAMERA_Z)?;

        let renderer = three.create(
            "WebGLRenderer",
            &[options(&[("alpha", true.into()), ("antialias", true.into())])?],
        )?;
        call(&renderer, "setSize", &[viewport.x.into(), viewport.y.into()])?;
        let canvas: web::Node = get(&renderer, "domElement")?.dyn_into()?;
        container.append_child(&canvas)?;

        let buffers = particle_buffers(rng, PARTICLE_COUNT);
        let geometry = three.create("BufferGeometry", &[])?;
        for (name, data) in [("position", &buffers.positions), ("color", &buffers.colors)] {
            let array = Float32Array::from(data.as_slice());
            let attribute = three.create("BufferAttribute", &[array.into(), 3u32.into()])?;
            call(&geometry, "setAttribute", &[name.into(), attribute])?;
        }
        let points_material = three.create(
            "PointsMaterial",
            &[options(&[
                ("size", PARTICLE_SIZE.into()),
                ("vertexColors", true.into()),
                ("transparent", true.into()),
                ("opacity", PARTICLE_OPACITY.into()),
            ])?],
        )?;
        let particles = three.create("Points", &[geometry, points_material])?;
        call(&scene, "add", &[particles.clone()])?;

        let sphere_geometry = three.create(
            "SphereGeometry",
            &[
                SPHERE_RADIUS.into(),
                SPHERE_SEGMENTS.into(),
                SPHERE_SEGMENTS.into(),
            ],
        )?;
        let sphere_material = three.create(
            "MeshBasicMaterial",
            &[options(&[
                ("color", SPHERE_COLOR.into()),
                ("transparent", true.into()),
                ("opacity", SPHERE_OPACITY.into()),
            ])?],
        )?;
        let sphere = three.create("Mesh", &[sphere_geometry, sphere_material])?;
        call(&scene, "add", &[sphere.clone()])?;

        Ok(Self {
            renderer,
            scene,
            camera,
            particles,
            sphere,
        })
    }

    fn render(&self, motion: &SceneMotion, now_ms: f64) -> Result<(), JsValue> {
        for (object, rot) in [(&self.particles, motion.particles), (&self.sphere, motion.sphere)] {
            let rotation = get(object, "rotation")?;
            set(&rotation, "x", rot.x)?;
            set(&rotation, "y", rot.y)?;
        }
        let s = sphere_scale(now_ms);
        let scale = get(&self.sphere, "scale")?;
        for axis in ["x", "y", "z"] {
            set(&scale, axis, s)?;
        }
        call(&self.renderer, "render", &[self.scene.clone(), self.camera.clone()])?;
        Ok(())
    }

    fn resize(&self, viewport: Vec2) -> Result<(), JsValue> {
        set(&self.camera, "aspect", aspect(viewport))?;
        call(&self.camera, "updateProjectionMatrix", &[])?;
        call(&self.renderer, "setSize", &[viewport.x.into(), viewport.y.into()])?;
        Ok(())
    }
}

/// Build the particle scene in `#canvas-container` and render it every frame.
pub fn start<R: Rng>(
    three: &Three,
    window: &web::Window,
    document: &web::Document,
    rng: &mut R,
) -> anyhow::Result<LoopHandle> {
    let container = dom::by_id(document, CANVAS_CONTAINER_ID)
        .ok_or_else(|| SiteError::missing(format!("#{CANVAS_CONTAINER_ID}")))?;
    let scene = ThreeScene::build(three, &container, dom::viewport_size(window), rng)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let scene = Rc::new(scene);

    let resized = scene.clone();
    let w = window.clone();
    dom::listen(window, "resize", move |_| {
        if let Err(e) = resized.resize(dom::viewport_size(&w)) {
            log::warn!("[scene] resize failed: {:?}", e);
        }
    });

    let pointer = PointerTracker::default();
    events::wire_scene_pointer(window, document, pointer.clone());

    let mut motion = SceneMotion::default();
    let mut failed = false;
    let handle = repeat_each_frame(Rc::new(RafScheduler::new(window.clone())), move || {
        if failed {
            return;
        }
        motion.step(pointer.position());
        if let Err(e) = scene.render(&motion, js_sys::Date::now()) {
            log::error!("[scene] render failed, freezing backdrop: {:?}", e);
            failed = true;
        }
    });
    log::info!("[scene] {} particles", PARTICLE_COUNT);
    Ok(handle)
}
