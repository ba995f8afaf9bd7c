use super::glutils::*;
use gl::{types::GLenum, *};
use std::ffi::CString;

#[derive(Default, Clone, Copy)]
pub struct Shaders {
    program_id: u32,
}

impl Shaders {
    pub fn from_str(vertex_code: &str, fragment_code: &str) -> Result<Shaders, String> {
        let vertex_shader = Self::create(VERTEX_SHADER, "vertex", vertex_code)?;
        let fragment_shader = match Self::create(FRAGMENT_SHADER, "fragment", fragment_code) {
            Ok(id) => id,
            Err(e) => {
                unsafe { gl::DeleteShader(vertex_shader) };
                return Err(e);
            }
        };

        // create program and link shaders
        let shader_program = unsafe { gl::CreateProgram() };
        unsafe { gl::AttachShader(shader_program, vertex_shader) };
        unsafe { gl::AttachShader(shader_program, fragment_shader) };
        unsafe { gl::LinkProgram(shader_program) };

        // not needed anymore, linked or not
        unsafe { gl::DeleteShader(vertex_shader) };
        unsafe { gl::DeleteShader(fragment_shader) };

        let mut success = 0;
        unsafe {
            gl::GetProgramiv(shader_program, LINK_STATUS, &mut success);
        }
        if success == 0 {
            let mut v: Vec<u8> = vec![0; 1024];
            let mut log_len = 0_i32;
            unsafe {
                gl::GetProgramInfoLog(shader_program, 1024, &mut log_len, v.as_mut_ptr().cast());
                gl::DeleteProgram(shader_program);
            }
            return Err(format!("program link error: {}", info_log(v, log_len)));
        }

        Ok(Shaders {
            program_id: shader_program,
        })
    }

    /// Creates and compiles one shader stage; nothing is left behind on failure.
    fn create(kind: GLenum, label: &str, code: &str) -> Result<u32, String> {
        let shader_id = unsafe { gl::CreateShader(kind) };
        if shader_id == 0 {
            return Err(format!("gl::createShader({label}) failed"));
        }
        if let Err(e) = Self::compile(shader_id, code) {
            unsafe { gl::DeleteShader(shader_id) };
            return Err(format!("{label} shader compilation error: {e}"));
        }
        Ok(shader_id)
    }

    fn compile(shader_id: u32, shader_code: &str) -> Result<(), String> {
        let code_len = shader_code.len() as i32;
        unsafe {
            gl::ShaderSource(
                shader_id,
                1,
                &(shader_code.as_bytes().as_ptr().cast()),
                &code_len,
            );
        }

        unsafe { gl::CompileShader(shader_id) };

        // check if there are compilation errors
        let mut success = 0;
        unsafe {
            gl::GetShaderiv(shader_id, COMPILE_STATUS, &mut success);
        }

        if success == 0 {
            let mut v: Vec<u8> = vec![0; 1024];
            let mut log_len = 0_i32;
            unsafe {
                gl::GetShaderInfoLog(shader_id, 1024, &mut log_len, v.as_mut_ptr().cast());
            }
            return Err(info_log(v, log_len));
        }
        Ok(())
    }

    fn get_uniform_location(&self, name: &str) -> Result<i32, String> {
        let c_name = CString::new(name)
            .map_err(|_| format!("get_uniform_location: CString::new failed for '{}'", name))?;
        let location = unsafe { gl::GetUniformLocation(self.program_id, c_name.as_ptr().cast()) };
        check_gl_err()?;
        if location == -1 {
            return Err(format!(
                "program({}): location '{}' does not correspond to an active uniform variable in program",
                self.program_id, name
            ));
        }
        Ok(location)
    }

    pub fn use_program(&self) -> Result<(), String> {
        unsafe { gl::UseProgram(self.program_id) };
        check_gl_err()
    }

    pub fn set_i32(&self, name: &str, value: i32) -> Result<(), String> {
        let location = self.get_uniform_location(name)?;
        unsafe { gl::Uniform1i(location, value) };
        Ok(())
    }

    pub fn delete(&self) {
        unsafe { gl::DeleteProgram(self.program_id) };
    }
}

/// GL fills at most the buffer, `len` excludes the trailing NUL.
fn info_log(mut buf: Vec<u8>, len: i32) -> String {
    buf.truncate(len.clamp(0, buf.len() as i32) as usize);
    String::from_utf8_lossy(&buf).to_string()
}
