//! Streams a [`Frame`] to the window through a textured full-screen quad.

use crate::frame::Frame;
use crate::glutils::*;
use crate::shaders::Shaders;
use gl::*;

const VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec2 aPos;
layout (location = 1) in vec2 aTexCoord;

out vec2 TexCoord;

void main()
{
    gl_Position = vec4(aPos, 0.0, 1.0);
    TexCoord = aTexCoord;
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 330 core
out vec4 FragColor;

in vec2 TexCoord;

uniform sampler2D frame;

void main()
{
    FragColor = texture(frame, TexCoord);
}
"#;

// x, y, u, v; frame rows are top down so v is flipped
#[rustfmt::skip]
const QUAD: [f32; 16] = [
    -1.0,  1.0,   0.0, 0.0, // top left
     1.0,  1.0,   1.0, 0.0, // top right
     1.0, -1.0,   1.0, 1.0, // bottom right
    -1.0, -1.0,   0.0, 1.0, // bottom left
];
const QUAD_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

pub struct FramePresenter {
    width: usize,
    height: usize,
    shaders: Shaders,
    vao: u32,
    vbo: u32,
    ebo: u32,
    texture: u32,
}

impl FramePresenter {
    /// Needs a current GL context.
    pub fn new(width: usize, height: usize) -> Result<FramePresenter, String> {
        let shaders = Shaders::from_str(VERTEX_SHADER, FRAGMENT_SHADER)?;

        let (mut vao, mut vbo, mut ebo) = (0, 0, 0);
        unsafe {
            gl::GenVertexArrays(1, &mut vao);
            gl::GenBuffers(1, &mut vbo);
            gl::GenBuffers(1, &mut ebo);
            gl::BindVertexArray(vao);
            gl::BindBuffer(ARRAY_BUFFER, vbo);
        }
        gl_buffer_data_arr_stat(&QUAD);
        unsafe { gl::BindBuffer(ELEMENT_ARRAY_BUFFER, ebo) };
        gl_buffer_data_element_stat(&QUAD_INDICES);
        gl_vertex_attrib_ptr_enab(0, 2, 4, 0);
        gl_vertex_attrib_ptr_enab(1, 2, 4, 2);
        unsafe { gl::BindVertexArray(0) };
        check_gl_err()?;

        let texture = create_texture_rgba(width, height)?;

        shaders.use_program()?;
        shaders.set_i32("frame", 0)?;

        Ok(FramePresenter {
            width,
            height,
            shaders,
            vao,
            vbo,
            ebo,
            texture,
        })
    }

    /// Uploads the frame and draws it. The caller swaps the window buffers.
    pub fn draw(&mut self, frame: &Frame) -> Result<(), String> {
        if frame.width() != self.width || frame.height() != self.height {
            return Err(format!(
                "frame is {} x {}, presenter expects {} x {}",
                frame.width(),
                frame.height(),
                self.width,
                self.height
            ));
        }
        unsafe { gl::ActiveTexture(TEXTURE0) };
        upload_texture_rgba(self.texture, self.width, self.height, frame.pixels())?;

        self.shaders.use_program()?;
        unsafe {
            gl::BindVertexArray(self.vao);
            gl::DrawElements(
                TRIANGLES,
                QUAD_INDICES.len() as i32,
                UNSIGNED_INT,
                std::ptr::null(),
            );
            gl::BindVertexArray(0);
        }
        check_gl_err()
    }
}

impl Drop for FramePresenter {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteTextures(1, &self.texture);
            gl::DeleteBuffers(1, &self.ebo);
            gl::DeleteBuffers(1, &self.vbo);
            gl::DeleteVertexArrays(1, &self.vao);
        }
        self.shaders.delete();
    }
}
